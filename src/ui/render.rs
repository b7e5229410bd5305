//! Thin rendering layer: copies ComputationResult fields into terminal
//! output. No computation happens here.

use crate::models::poem::Poem;
use crate::models::result::ComputationResult;
use crate::utils::colors::{GREY, RESET, color_for_progress};
use crate::utils::formatting::{format_money, format_percent, visible_width};
use ansi_term::Colour;
use chrono::NaiveDateTime;

const BAR_WIDTH: usize = 28;

/// Build the progress bar cell, e.g. `[███████░░░░░░]  52.1%`.
pub fn progress_bar(pct: f64) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * BAR_WIDTH as f64).round() as usize;
    let color = color_for_progress(clamped);
    format!(
        "[{}{}{}{}{}]  {}",
        color,
        "█".repeat(filled),
        GREY,
        "░".repeat(BAR_WIDTH - filled),
        RESET,
        format_percent(clamped),
    )
}

fn status_lines(result: &ComputationResult, now: NaiveDateTime) -> Vec<String> {
    vec![
        format!("🕒 {}", now.format("%A %Y-%m-%d %H:%M")),
        progress_bar(result.progress_percent),
        format!(
            "💰 Earned today: {}  (hourly rate {})",
            Colour::Green.paint(format_money(result.earned_today)),
            format_money(result.hourly_rate),
        ),
        format!("🏖️  {}", result.countdown_text),
    ]
}

/// Print the status block with a separator sized to its widest line.
pub fn render_status(result: &ComputationResult, now: NaiveDateTime) {
    let lines = status_lines(result, now);
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);

    println!("{}", "─".repeat(width));
    for line in &lines {
        println!("{}", line);
    }
    println!("{}", "─".repeat(width));
}

pub fn render_poem(poem: &Poem) {
    println!("📜 {}", poem.content);
    let attribution = if poem.origin.is_empty() {
        format!("— {}", poem.author)
    } else {
        format!("— {}, {}", poem.author, poem.origin)
    };
    println!("   {}", Colour::Cyan.italic().paint(attribution));
}

use serde::Serialize;

/// One computation tick: everything the rendering layer needs.
///
/// Recomputed from scratch every tick, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComputationResult {
    /// Share of the paid shift already worked, 0-100.
    pub progress_percent: f64,
    /// Wage accrued since the start of the shift, frozen during the break.
    pub earned_today: f64,
    /// Derived rate: daily salary over paid hours.
    pub hourly_rate: f64,
    /// Human-readable countdown to the end of the working week.
    pub countdown_text: String,
}

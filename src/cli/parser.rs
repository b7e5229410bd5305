use clap::{Parser, Subcommand};

/// Command-line interface definition for workclock
/// CLI application to follow shift progress, accrued wage and the weekend countdown
#[derive(Parser)]
#[command(
    name = "workclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work clock CLI: shift progress, accrued wage and the countdown to the weekend",
    long_about = None
)]
pub struct Cli {
    /// Override the settings file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and write a default settings file
    Init,

    /// Manage the settings file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current settings file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Update salary and shift settings (the whole record is re-saved)
    Set {
        /// Monthly salary, in your currency
        #[arg(long = "salary")]
        salary: Option<f64>,

        /// Working days per month
        #[arg(long = "days")]
        days: Option<u32>,

        /// Shift start time (HH:MM)
        #[arg(long = "start")]
        start: Option<String>,

        /// Shift end time (HH:MM)
        #[arg(long = "end")]
        end: Option<String>,

        /// Lunch break start time (HH:MM); implies the break is enabled
        #[arg(long = "break-start", conflicts_with = "no_break")]
        break_start: Option<String>,

        /// Lunch break end time (HH:MM); implies the break is enabled
        #[arg(long = "break-end", conflicts_with = "no_break")]
        break_end: Option<String>,

        /// Disable the lunch break entirely
        #[arg(long = "no-break")]
        no_break: bool,
    },

    /// Show the work clock for the current moment
    Status {
        /// Evaluate at a fixed timestamp instead of now (YYYY-MM-DD HH:MM)
        #[arg(long = "at", hide = true)]
        at: Option<String>,

        /// Also fetch and show a random poem
        #[arg(long = "poem")]
        poem: bool,

        /// Emit the computation result as JSON instead of the rendered view
        #[arg(long = "json")]
        json: bool,
    },

    /// Re-render the work clock every 60 seconds
    Watch {
        /// Number of refresh cycles before exiting (default: run until interrupted)
        #[arg(long = "ticks")]
        ticks: Option<u64>,
    },

    /// Fetch and print a random poem
    Poem,

    /// Holiday-aware working-days count for a month
    Days {
        /// Month to count (YYYY-MM); defaults to the current month
        month: Option<String>,
    },
}

use clap::{Parser, Subcommand};

/// Command-line interface definition for wfotracker
/// CLI client for the training roster and WFO attendance forecast store
#[derive(Parser)]
#[command(
    name = "wfotracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee trainings and work-from-office forecasts against a REST record store",
    long_about = None
)]
pub struct Cli {
    /// Override the store URL (useful for tests or a custom server)
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List training records, with search and pagination
    List {
        #[arg(long, short, help = "Case-insensitive search term over every column")]
        search: Option<String>,

        #[arg(long, default_value_t = 0, help = "Zero-based page number")]
        page: usize,

        #[arg(
            long = "page-size",
            help = "Rows per page; -1 shows all rows (default from config)"
        )]
        page_size: Option<i64>,
    },

    /// Print the formatted details block for one training record
    Show {
        /// Record id
        id: i64,
    },

    /// Edit a training record by id
    Edit {
        /// Record id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Comma-separated training titles")]
        titles: Option<String>,

        #[arg(long = "training-type")]
        training_type: Option<String>,

        #[arg(long)]
        mode: Option<String>,

        #[arg(long, help = "Planned date")]
        planned: Option<String>,

        #[arg(long, help = "Start date")]
        start: Option<String>,

        #[arg(long, help = "End date")]
        end: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Add a new training record
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, help = "Comma-separated training titles")]
        titles: String,

        #[arg(long = "training-type")]
        training_type: String,

        #[arg(long)]
        mode: String,

        #[arg(long, help = "Planned date")]
        planned: String,

        #[arg(long, help = "Start date")]
        start: String,

        #[arg(long, help = "End date")]
        end: String,

        #[arg(long, default_value = "")]
        status: String,
    },

    /// Export the full roster to an XLSX workbook
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default training_data.xlsx)")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the saved forecast calendar for a month
    Forecast {
        #[arg(long, value_name = "YYYY-MM", help = "Forecast month (default: current)")]
        month: Option<String>,
    },

    /// Apply a weekday office-preference pattern to a month and save it
    Apply {
        #[arg(long, value_name = "YYYY-MM", help = "Forecast month (default: current)")]
        month: Option<String>,

        #[arg(
            long,
            value_name = "DAYS",
            default_value = "",
            help = "Comma-separated office weekdays, e.g. mon,wed,fri"
        )]
        days: String,

        #[arg(long = "dry-run", help = "Preview the computed month without saving")]
        dry_run: bool,
    },

    /// Cycle or set one day cell and save the month
    Mark {
        #[arg(long, value_name = "YYYY-MM", help = "Forecast month (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Day of month (1..31)")]
        day: u32,

        #[arg(long, help = "Set the state directly (O, H or L) instead of cycling")]
        state: Option<String>,
    },
}

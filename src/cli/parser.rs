use crate::export::ExportFormat;
use crate::models::productivity::Productivity;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWorklogger
#[derive(Parser)]
#[command(
    name = "rworklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log work tasks, review productivity charts and ask an AI assistant about your work data",
    long_about = None
)]
pub struct Cli {
    /// Override the store connection URI (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by the table, summary and export views.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only these persons (repeatable)
    #[arg(long = "person", value_name = "NAME")]
    pub persons: Vec<String>,

    /// Keep only these productivity values (repeatable)
    #[arg(long = "productivity", value_name = "VALUE")]
    pub productivity: Vec<String>,

    /// Filter by year/month/day or a custom range
    /// (YYYY, YYYY-MM, YYYY-MM-DD, start:end, or "all")
    #[arg(long, short, value_name = "RANGE")]
    pub range: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a work entry
    Add {
        /// Who did the work
        #[arg(long)]
        person: String,

        /// Short task description
        #[arg(long)]
        task: String,

        /// Task type (Analysis, Coding, Meeting, Email, Other or free text)
        #[arg(long = "type", default_value = "Analysis")]
        task_type: String,

        /// Duration in minutes (1-480)
        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        time: i64,

        #[arg(long, value_enum, default_value = "productive")]
        productivity: Productivity,

        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the registered entries
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Newest entries first
        #[arg(long)]
        sort: bool,
    },

    /// Show time totals by productivity, day and task type
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the context block sent to the AI assistant
    Context {
        /// Number of recent entries to include
        #[arg(long = "rows", short = 'n')]
        rows: Option<usize>,
    },

    /// Ask the AI assistant a question about your work data
    Ask {
        /// The question
        question: String,

        /// Number of recent entries to include as context
        #[arg(long = "rows", short = 'n')]
        rows: Option<usize>,

        /// Override the configured model
        #[arg(long)]
        model: Option<String>,
    },

    /// Export the entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Add randomly generated sample entries
    Seed {
        #[arg(long, default_value_t = crate::core::seed::DEFAULT_SEED_COUNT)]
        count: usize,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

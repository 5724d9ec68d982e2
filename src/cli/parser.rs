use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecard
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal punch clock: record entry, breaks and exit, track your monthly balance and export attendance sheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this profile (id or name) instead of the active one
    #[arg(global = true, long = "profile")]
    pub profile: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Punch now (kind defaults to the suggested next punch)
    Punch {
        /// entry | break-start | break-end | exit (also: in, break, back, out)
        kind: Option<String>,

        #[arg(long = "note", help = "Optional note attached to the punch")]
        note: Option<String>,
    },

    /// Add a punch at a given date and time
    Add {
        /// Date of the punch (YYYY-MM-DD or DD/MM/YYYY)
        date: String,

        /// Local time of the punch (HH:MM)
        time: String,

        /// entry | break-start | break-end | exit (also: in, break, back, out)
        kind: String,

        #[arg(long = "note", help = "Optional note attached to the punch")]
        note: Option<String>,
    },

    /// Delete ALL punches of the profile
    Clear {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List raw punches of a month
    List {
        #[arg(long, short, help = "Month to list (YYYY-MM), default: current month")]
        period: Option<String>,
    },

    /// Show today's punches and balance
    Status,

    /// Show the attendance sheet and totals of a month
    Month {
        #[arg(long, short, help = "Month to show (YYYY-MM), default: current month")]
        period: Option<String>,
    },

    /// Export the attendance sheet of a month
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Month to export (YYYY-MM), default: current month")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// View or change the profile settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "workload", help = "Daily target: minutes, 8h, 7h30m or 07:30")]
        workload: Option<String>,

        #[arg(long = "name", help = "Employee name printed on sheets")]
        employee_name: Option<String>,

        #[arg(long = "employer")]
        employer: Option<String>,

        #[arg(long = "role")]
        role: Option<String>,

        #[arg(long = "registration")]
        registration: Option<String>,

        #[arg(long = "remind-entry", value_name = "HH:MM|off")]
        remind_entry: Option<String>,

        #[arg(long = "remind-break-start", value_name = "HH:MM|off")]
        remind_break_start: Option<String>,

        #[arg(long = "remind-break-end", value_name = "HH:MM|off")]
        remind_break_end: Option<String>,

        #[arg(long = "remind-exit", value_name = "HH:MM|off")]
        remind_exit: Option<String>,
    },

    /// Fire notifications for reminders that are due
    Remind,

    /// Ask the text-generation service for a summary of a month
    Summary {
        #[arg(long, short, help = "Month to summarize (YYYY-MM), default: current month")]
        period: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create a new profile
    Create { name: String },
    /// Make a profile the active one
    Switch { target: String },
    /// List profiles
    List,
    /// Show the active profile
    Show,
}

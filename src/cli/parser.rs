use crate::calendar::ViewMode;
use crate::config::Backend;
use crate::export::ExportFormat;
use crate::models::{BusyStatus, EventType, Notification, Role, Visibility};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rSchoolCal
/// School calendar CLI: month/week/day/year grids over a local event store
#[derive(Parser)]
#[command(
    name = "rschoolcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A school calendar CLI: compose month, week, day and year views over a local event store",
    long_about = None
)]
pub struct Cli {
    /// Override event store path (useful for tests or a second calendar)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override the storage backend of the store
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Act as this role (read-only roles cannot create, edit or delete)
    #[arg(global = true, long = "role", value_enum)]
    pub role: Option<Role>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Optional event fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EventFields {
    /// Event category (drives colour only)
    #[arg(long = "type", value_enum)]
    pub event_type: Option<EventType>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Free text, e.g. "Class 5A, Mr. Rao"
    #[arg(long)]
    pub attendees: Option<String>,

    #[arg(long, value_enum)]
    pub visibility: Option<Visibility>,

    /// Show as busy or free
    #[arg(long = "busy", value_enum)]
    pub busy_status: Option<BusyStatus>,

    /// Reminder offset (display only)
    #[arg(long = "notify", value_enum)]
    pub notification: Option<Notification>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty event store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Create an event
    Add {
        /// Event title
        title: String,

        /// Start (YYYY-MM-DD HH:MM, YYYY-MM-DDTHH:MM or YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End (same formats as --start); defaults to the start
        #[arg(long)]
        end: Option<String>,

        /// Mark as an all-day event
        #[arg(long = "all-day")]
        all_day: bool,

        #[command(flatten)]
        fields: EventFields,
    },

    /// Update an event by id (a unique id prefix is accepted)
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        /// Set or clear the all-day flag
        #[arg(long = "all-day")]
        all_day: Option<bool>,

        #[command(flatten)]
        fields: EventFields,
    },

    /// Delete an event by id
    Del {
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List events
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,

        #[arg(long = "type", value_enum, help = "Only events of this type")]
        event_type: Option<EventType>,
    },

    /// Show the detail panel of one event
    Show { id: String },

    /// Render the calendar
    View {
        #[arg(long, value_enum, help = "Day, week, month or year (default from config)")]
        mode: Option<ViewMode>,

        #[arg(long, help = "Anchor date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, num_args = 0..=1, default_missing_value = "1", help = "Go back N periods")]
        prev: Option<u32>,

        #[arg(long, num_args = 0..=1, default_missing_value = "1", help = "Go forward N periods")]
        next: Option<u32>,

        #[arg(long, help = "Jump to today (ignores --date)")]
        today: bool,
    },

    /// Open a day cell: Day view when the day has events
    Open { date: String },

    /// List the seeded school holidays
    Holidays {
        #[arg(long, help = "Year (default: current year)")]
        year: Option<i32>,
    },

    /// Export events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import events from a CSV file (columns matched by header name)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the event store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show event store statistics
    Info,
}

use clap::{Parser, Subcommand};

/// Command-line interface definition for evman
/// CLI application to manage a personal event list with SQLite
#[derive(Parser)]
#[command(
    name = "evman",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple event list manager CLI: log in with any username, then add, edit and delete events",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom store)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
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

    /// Log in (or register) with any username
    Login {
        /// Username to log in with
        username: String,

        /// Password (accepted but never checked or stored)
        #[arg(long = "password", short = 'p')]
        password: Option<String>,
    },

    /// Log out and forget the stored identity
    Logout,

    /// Show the current session
    Whoami,

    /// Add a new event
    Add {
        /// Event name
        name: String,

        /// Event description
        #[arg(default_value = "")]
        description: String,
    },

    /// Edit an existing event by id
    Edit {
        /// Id of the event to edit
        id: i64,

        /// New event name (keeps the current one if omitted)
        #[arg(long = "name")]
        name: Option<String>,

        /// New event description (keeps the current one if omitted)
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// Id of the event to delete
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List all events
    List {
        #[arg(long = "ids", help = "Show only event ids, one per line")]
        ids_only: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "linkshelf", version, long_version = LONG_VERSION)]
#[command(about = "Keep your favourite links on a shelf", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a link to the top of the shelf
    #[command(alias = "a")]
    Add {
        /// Display name
        name: String,

        /// Address; https:// is assumed when no scheme is given
        url: String,
    },

    /// Show the shelf
    #[command(alias = "ls")]
    List {
        /// Only show links whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show links whose name contains a term
    Search { term: String },

    /// Delete one or more links
    #[command(alias = "rm")]
    Delete {
        /// Positions (1, 2, ...) or link ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or switch the theme (light, dark, sepia)
    Theme {
        /// Theme to switch to
        name: Option<String>,
    },

    /// Show the favicon sources for a link
    Favicon {
        /// Position or link id
        selector: String,

        /// Pretend this many icon loads failed
        #[arg(long, default_value_t = 0)]
        failures: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (favicon-size, shuffle-palette, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrypick
#[derive(Debug, Parser)]
#[command(
    name = "countrypick",
    version,
    about = "Organize, search and pick countries the way a country picker shows them"
)]
pub struct CliArgs {
    /// JSON catalog file (array of entries); the embedded catalog is used when omitted
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// JSON picker configuration file
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// JSON history file used to persist recent selections (in-memory when omitted)
    #[arg(long = "history", global = true)]
    pub history: Option<PathBuf>,

    /// Locale used for display names (e.g. de, pt_BR)
    #[arg(short = 'l', long = "locale", global = true, default_value = "en")]
    pub locale: String,

    /// Current region; defaults to the region of $LANG
    #[arg(short = 'r', long = "region", global = true)]
    pub region: Option<String>,

    /// Comma-separated list of ISO2 codes to show exclusively (e.g. DE,CH,AT)
    #[arg(short = 'a', long = "allowed", global = true)]
    pub allowed: Option<String>,

    /// Comma-separated list of ISO2 codes pinned in the "Preferred" section
    #[arg(short = 'p', long = "preferred", global = true)]
    pub preferred: Option<String>,

    /// Hide the "Recent" section and do not record selections
    #[arg(long = "no-recents", global = true)]
    pub no_recents: bool,

    /// Hide the "Current Location" section
    #[arg(long = "no-current-location", global = true)]
    pub no_current_location: bool,

    /// Search matches country names only (not ISO or dialing codes)
    #[arg(long = "names-only", global = true)]
    pub names_only: bool,

    /// Maximum number of recent countries (0 or less disables them)
    #[arg(long = "limit", global = true, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the organized sections
    Sections {
        /// Also print empty alphabetic buckets
        #[arg(long = "show-empty")]
        show_empty: bool,

        /// Show dialing codes next to names
        #[arg(short = 'd', long = "dial-codes")]
        dial_codes: bool,
    },

    /// Rank countries against a free-text query
    Search {
        /// Query words (e.g. united states, +49, de)
        query: Vec<String>,
    },

    /// Confirm a pick and record it in the history
    Select {
        /// ISO2 code (case-insensitive)
        code: String,
    },

    /// List recently picked countries, most recent first
    Recents,

    /// Lookup a country by ISO2 code or by name
    Lookup {
        /// ISO2 code, code prefix (with --prefix) or country name
        code: String,

        /// Treat the argument as a code prefix
        #[arg(long = "prefix")]
        prefix: bool,
    },

    /// Show the section an index-bar title jumps to
    Index {
        /// Index title (e.g. A, Z, #); lists all titles when omitted
        title: Option<String>,
    },

    /// Find countries by dialing code prefix
    Dial {
        /// Dialing code prefix, with or without '+'
        prefix: String,
    },
}

/// Split a comma-separated code list, dropping blanks.
pub fn split_codes(list: &str) -> Vec<String> {
    list.split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(str::to_owned)
        .collect()
}

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Seed the store from a JSONL file of commit records")]
    Import {
        /// One JSON object per line: {"hash", "author", "author_date", ...}
        file: PathBuf,
    },

    #[command(about = "Manage unified identities")]
    Identities {
        #[command(subcommand)]
        command: IdentitiesCommand,
    },

    #[command(about = "Print the activity list for a selection variable")]
    List {
        #[command(flatten)]
        query: QueryArgs,
    },

    #[command(about = "Time since each contributor's first activity")]
    Age {
        #[command(flatten)]
        args: DurationArgs,
    },

    #[command(about = "Time since each contributor's last activity")]
    Idle {
        #[command(flatten)]
        args: DurationArgs,
    },
}

#[derive(Subcommand)]
pub enum IdentitiesCommand {
    #[command(about = "Record person names as aliases of a canonical person")]
    Link {
        canonical: String,

        #[arg(required = true)]
        aliases: Vec<String>,
    },
}

#[derive(Args)]
pub struct QueryArgs {
    /// Selection variable: list_authors, list_committers, list_uauthors
    /// or list_ucommitters
    #[arg(long, default_value = "list_authors")]
    pub var: String,

    /// Only count events at or after this time (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub since: Option<String>,

    /// Only count events before this time (exclusive)
    #[arg(long)]
    pub until: Option<String>,

    /// Exclude merge commits
    #[arg(long)]
    pub no_merges: bool,
}

#[derive(Args)]
pub struct DurationArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Reference time for duration math (default: latest event timestamp)
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Only consider persons with activity at or after this time
    #[arg(long)]
    pub active_since: Option<String>,

    /// Only consider persons with activity before this time (exclusive)
    #[arg(long)]
    pub active_until: Option<String>,
}

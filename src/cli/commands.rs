use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sift", about = concat!("sift v", env!("CARGO_PKG_VERSION"), " - a GTD panel for your markdown notes"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different vault directory
    #[arg(short = 'C', long = "vault", global = true)]
    pub vault: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks through the panel pipeline (cap, filter, search, sort)
    List(ListArgs),
    /// Show the six per-category counters
    Stats,
    /// Move a task to a GTD bucket
    Move(MoveArgs),
    /// Reopen a completed task
    Reopen(ReopenArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Category filter (all, inbox, next, waiting, someday, completed)
    #[arg(long)]
    pub filter: Option<String>,
    /// Free-text search over task text and file path
    #[arg(long)]
    pub search: Option<String>,
    /// Sort order (modified, created, alphabetical)
    #[arg(long)]
    pub sort: Option<String>,
    /// Show file paths
    #[arg(long)]
    pub path: bool,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Task location as <file>:<line> (1-based line number)
    pub location: String,
    /// Target bucket (inbox, next, waiting, someday, completed)
    pub target: String,
}

#[derive(Args)]
pub struct ReopenArgs {
    /// Task location as <file>:<line> (1-based line number)
    pub location: String,
}

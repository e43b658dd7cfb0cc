mod commands;

pub use commands::*;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tenure")]
#[command(about = "Compute contributor age and idle durations from a commit store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the commit store
    #[arg(long, default_value = "tenure.db", global = true)]
    pub db: PathBuf,

    /// Print every SQL query to stderr before execution
    #[arg(long, global = true)]
    pub echo: bool,

    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

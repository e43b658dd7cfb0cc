mod args;
mod commands;
mod dates;
mod handlers;

pub use args::{Cli, Commands, DurationArgs, IdentitiesCommand, OutputFormat, QueryArgs};
pub use commands::run;

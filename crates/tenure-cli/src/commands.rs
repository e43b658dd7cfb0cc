use anyhow::Result;
use tenure_engine::DurationVar;
use tenure_store::Database;

use super::args::{Cli, Commands, IdentitiesCommand};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let db = Database::open_with(&cli.db, cli.echo)?;

    match cli.command {
        Commands::Import { file } => handlers::import::handle(&db, &file),

        Commands::Identities { command } => match command {
            IdentitiesCommand::Link { canonical, aliases } => {
                handlers::identities::handle(&db, &canonical, &aliases)
            }
        },

        Commands::List { query } => handlers::list::handle(db, &query, cli.format),

        Commands::Age { args } => handlers::duration::handle(db, DurationVar::Age, &args, cli.format),

        Commands::Idle { args } => {
            handlers::duration::handle(db, DurationVar::Idle, &args, cli.format)
        }
    }
}

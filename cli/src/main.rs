mod commands;
mod terminal;

use commands::{CommandLine, Commands, query, serve};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = commands.to_config();

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Serve { .. } => serve::serve(&cfg).await,
        Commands::Query { city, count, search } => query::query(city, count, search, &cfg),
    }
}

pub mod query;
pub mod serve;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use cafe_common::config::{Config, DEFAULT_ADDR};
use cafe_common::repository::CafeRepository;
use cafe_core::catalog::InMemoryCatalog;
use cafe_core::resolver::QueryResolver;

#[derive(Parser)]
#[command(name = "cafe")]
#[command(about = "Look up cafés by city.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON dataset to serve instead of the built-in one
    #[arg(long, global = true, env = "CAFE_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the café lookup over HTTP
    #[command(alias = "s")]
    Serve {
        #[arg(long, env = "CAFE_ADDR", default_value_t = DEFAULT_ADDR)]
        addr: SocketAddr,
    },
    /// Resolve a single query and print the result
    #[command(alias = "q")]
    Query {
        #[arg(long)]
        city: Option<String>,
        /// Maximum number of cafés; kept raw so the resolver validates it
        #[arg(long)]
        count: Option<String>,
        /// Case-insensitive substring of the café name
        #[arg(long)]
        search: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let addr = match &self.command {
            Commands::Serve { addr } => *addr,
            Commands::Query { .. } => DEFAULT_ADDR,
        };
        Config {
            addr,
            dataset: self.dataset.clone(),
            verbosity: self.verbose,
        }
    }
}

/// Loads the configured dataset and wires it into a resolver.
pub fn build_resolver(cfg: &Config) -> anyhow::Result<QueryResolver> {
    let catalog = match &cfg.dataset {
        Some(path) => InMemoryCatalog::from_json_file(path)?,
        None => InMemoryCatalog::builtin()?,
    };

    let cities: Vec<&str> = catalog.cities().iter().map(|c| c.as_str()).collect();
    info!("Loaded {} cities: {}", catalog.len(), cities.join(", "));

    Ok(QueryResolver::new(Arc::new(catalog)))
}

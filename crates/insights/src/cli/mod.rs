//! Command line interface
//!
//! | Command | Operation |
//! |---------|-----------|
//! | `index --file F` | Embed and store the insights in a JSON array file |
//! | `search QUERY` | Semantic search, optionally by business type and urgency |
//! | `urgent QUERY` | Search restricted to urgent insights |
//! | `similar NAME` | Participants resembling a participant |
//! | `delete ID` | Remove one record |
//! | `status` | Backend, size and dimension of the vector store |
//! | `init [PATH]` | Write a configuration file with default values |

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use insights_domain::constants::{DEFAULT_TOP_K, URGENCY_MAX, URGENCY_MIN};
use insights_infrastructure::config::ConfigLoader;
use insights_infrastructure::constants::DEFAULT_CONFIG_FILENAME;
use insights_infrastructure::init_app;
use insights_infrastructure::logging::init_logging;

/// Urgency threshold used by `urgent` when none is given
const DEFAULT_URGENT_THRESHOLD: u8 = 4;

/// Command line interface for Semantic Insights
#[derive(Parser, Debug)]
#[command(name = "insights")]
#[command(about = "Semantic Insights - search coaching insights by meaning")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Embed and store insights from a JSON file
    Index {
        /// JSON array of insight records
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Search insights by meaning
    Search {
        /// Free text query
        query: String,

        /// Maximum number of results
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Restrict to business types (repeatable)
        #[arg(short, long = "business")]
        business: Vec<String>,

        /// Restrict to insights at or above this urgency
        #[arg(long, value_parser = urgency_parser())]
        min_urgency: Option<u8>,
    },

    /// Search insights at or above an urgency level
    Urgent {
        /// Free text query
        query: String,

        /// Lowest urgency to include
        #[arg(long, default_value_t = DEFAULT_URGENT_THRESHOLD, value_parser = urgency_parser())]
        min_urgency: u8,

        /// Maximum number of results
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Find participants similar to a participant
    Similar {
        /// Participant name, matched exactly
        participant: String,

        /// Maximum number of results
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Delete a record by id
    Delete {
        /// Record id
        id: String,
    },

    /// Show vector store status
    Status,

    /// Write a configuration file with default values
    Init {
        /// Destination file
        #[arg(default_value = DEFAULT_CONFIG_FILENAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn urgency_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(i64::from(URGENCY_MIN)..=i64::from(URGENCY_MAX))
}

/// Run a parsed command line
///
/// Loads configuration, initializes logging and wires the services before
/// dispatching. `init` runs without any of that.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Init { path, force } = &cli.command {
        return commands::init_config(path, *force);
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let context = init_app(config).await?;
    commands::dispatch(&context, cli.command, cli.json).await
}

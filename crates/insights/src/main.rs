//! Semantic Insights - Entry Point
//!
//! Binary entry point for the `insights` command line tool. Lives in the
//! facade crate next to the library so both share one package.

use clap::Parser;
use insights::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await
}

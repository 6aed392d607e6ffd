//! Command implementations

use std::path::Path;

use anyhow::{Context, bail};
use insights_domain::constants::FIELD_URGENCY_LEVEL;
use insights_domain::value_objects::{Filter, SearchResult};
use insights_infrastructure::AppContext;
use insights_infrastructure::config::{AppConfig, ConfigLoader};
use insights_infrastructure::insights_file::read_insights_file;

use super::Command;
use super::output::{render_results, render_stats};

pub(super) fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    ConfigLoader::new().save_to_file(&AppConfig::default(), path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub(super) async fn dispatch(
    context: &AppContext,
    command: Command,
    json: bool,
) -> anyhow::Result<()> {
    let engine = context.search_engine();
    match command {
        Command::Index { file } => {
            let insights = read_insights_file(&file)?;
            let written = context.indexing().index_insights(&insights).await?;
            println!("Indexed {written} insights from {}", file.display());
        }
        Command::Search {
            query,
            top_k,
            business,
            min_urgency,
        } => {
            let urgency = min_urgency.map(|u| Filter::new().gte(FIELD_URGENCY_LEVEL, f64::from(u)));
            let results = if !business.is_empty() {
                engine
                    .search_with_business_filter(&query, &business, top_k, urgency.as_ref())
                    .await?
            } else {
                engine.search(&query, top_k, urgency.as_ref()).await?
            };
            print_results(&results, json)?;
        }
        Command::Urgent {
            query,
            min_urgency,
            top_k,
        } => {
            let results = engine.search_by_urgency(&query, min_urgency, top_k).await?;
            print_results(&results, json)?;
        }
        Command::Similar { participant, top_k } => {
            let results = engine
                .get_similar_participants(&participant, top_k)
                .await?;
            print_results(&results, json)?;
        }
        Command::Delete { id } => {
            if context.store().delete(&id).await? {
                println!("Deleted {id}");
            } else {
                println!("No record with id {id}");
            }
        }
        Command::Status => {
            let stats = context.store().get_stats().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_stats(&stats));
            }
        }
        Command::Init { path, force } => init_config(&path, force)?,
    }
    Ok(())
}

fn print_results(results: &[SearchResult], json: bool) -> anyhow::Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(results).context("Failed to serialize results")?;
        println!("{rendered}");
    } else {
        print!("{}", render_results(results));
    }
    Ok(())
}

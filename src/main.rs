//! # medharvest CLI
//!
//! Runs the article-harvesting pipeline over the fixed source list: fetch
//! each page, extract its paragraph text, screen it with the two LLM
//! plausibility checks, and append generated instruction/response pairs to
//! the JSONL dataset. Rejected URLs land in the rejection log.
//!
//! The source URL list is part of the build; the flags only move the output
//! files and pick the model.

mod telemetry;

use clap::Parser;
use medharvest::config::PipelineConfig;
use medharvest::fetcher::HttpFetcher;
use medharvest::oracle::{ChatOracle, Client};
use medharvest::pipeline;
use medharvest::sink::DatasetSink;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Harvest web articles into LLM instruction-tuning data", long_about = None)]
struct Cli {
    /// Model to use for classification and generation
    #[arg(short, long, default_value = "gpt-4o")]
    model: String,

    /// Path of the JSONL dataset file (appended to, never rewritten)
    #[arg(short, long, default_value = "medical_instruct_data.jsonl")]
    output: PathBuf,

    /// Path of the rejection log
    #[arg(short, long, default_value = "unused_log.txt")]
    reject_log: PathBuf,

    /// Character budget for extracted article text
    #[arg(long, default_value = "4000")]
    max_chars: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing_subscriber();

    let config = PipelineConfig::builder()
        .model(cli.model)
        .max_chars(cli.max_chars)
        .output_path(cli.output)
        .reject_log_path(cli.reject_log)
        .build();

    let client = Client::from_env()?;
    let oracle = ChatOracle::new(client, config.model.clone());
    let fetcher = HttpFetcher::new();
    let sink = DatasetSink::new(&config.output_path, &config.reject_log_path);

    println!("Harvesting {} sources...", config.urls.len());

    let report = pipeline::run(&config, &fetcher, &oracle, &sink).await?;

    println!(
        "Harvested {} sources, rejected {}, wrote {} records to {}",
        report.urls_harvested,
        report.urls_rejected,
        report.records_written,
        config.output_path.display()
    );

    Ok(())
}

//! # medharvest - web articles into instruction-tuning data
//!
//! This crate turns a fixed list of web articles into newline-delimited JSON
//! training records for LLM fine-tuning. Each article is fetched, reduced to
//! its paragraph text, screened by two LLM plausibility checks (is it medical,
//! does it read like a reputable source), and then expanded by the same LLM
//! into instruction/response pairs that are appended to a JSONL dataset.
//! Articles that fail either check are appended to a rejection log instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use medharvest::config::PipelineConfig;
//! use medharvest::fetcher::HttpFetcher;
//! use medharvest::oracle::{ChatOracle, Client};
//! use medharvest::pipeline;
//! use medharvest::sink::DatasetSink;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::default();
//!     let oracle = ChatOracle::new(Client::from_env()?, config.model.clone());
//!     let fetcher = HttpFetcher::new();
//!     let sink = DatasetSink::new(&config.output_path, &config.reject_log_path);
//!
//!     let report = pipeline::run(&config, &fetcher, &oracle, &sink).await?;
//!     println!("wrote {} records", report.records_written);
//!     Ok(())
//! }
//! ```

mod error;

pub mod classify;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod generate;
pub mod oracle;
pub mod pipeline;
pub mod records;
pub mod sink;

pub use error::Error;

/// Re-export of common types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::records::TrainingRecord;
}

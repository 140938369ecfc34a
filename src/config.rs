//! # Pipeline Configuration Module
//!
//! Configuration for the harvesting pipeline: the source URL list, the model
//! identifier, the per-article character budget, and the two output files.
//! Uses a builder pattern for flexible configuration.
//!
//! The default URL list is the fixed set of source articles this tool was
//! built around; swapping in a different corpus means editing the source or
//! constructing a config through the builder.

use std::path::PathBuf;

/// Character budget for extracted article text
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Number of instruction/response pairs requested per article
pub const DEFAULT_PAIRS_PER_ARTICLE: usize = 30;

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Ordered list of source URLs to process
    pub urls: Vec<String>,

    /// Model identifier for all oracle calls
    pub model: String,

    /// Maximum number of characters kept from each article
    pub max_chars: usize,

    /// Number of instruction/response pairs requested per article
    pub pairs_per_article: usize,

    /// Path of the JSONL dataset file (append-only)
    pub output_path: PathBuf,

    /// Path of the rejection log (append-only)
    pub reject_log_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            urls: vec![
                "https://www.mayoclinic.org/diseases-conditions/flu/symptoms-causes/syc-20351719"
                    .to_string(),
                "https://www.cdc.gov/flu/signs-symptoms/?CDC_AAref_Val=https://www.cdc.gov/flu/symptoms/index.html"
                    .to_string(),
                "https://www.rescuemycat.org/p/what-you-can-do-on-your-own.html".to_string(),
                "https://theonion.com/u-s-cancels-bird-flu-vaccine/".to_string(),
            ],
            model: "gpt-4o".to_string(),
            max_chars: DEFAULT_MAX_CHARS,
            pairs_per_article: DEFAULT_PAIRS_PER_ARTICLE,
            output_path: PathBuf::from("medical_instruct_data.jsonl"),
            reject_log_path: PathBuf::from("unused_log.txt"),
        }
    }
}

/// Builder for PipelineConfig
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Set the ordered list of source URLs
    pub fn urls(mut self, urls: Vec<String>) -> Self {
        self.config.urls = urls;
        self
    }

    /// Set the model identifier used for all oracle calls
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the per-article character budget
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Set the number of instruction/response pairs requested per article
    pub fn pairs_per_article(mut self, pairs: usize) -> Self {
        self.config.pairs_per_article = pairs;
        self
    }

    /// Set the path of the JSONL dataset file
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the path of the rejection log
    pub fn reject_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.reject_log_path = path.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl PipelineConfig {
    /// Create a new builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

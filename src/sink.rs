//! Dataset and rejection-log persistence
//!
//! Two append-only files: the JSONL dataset of training records, and a
//! plain-text log of URLs that failed a plausibility check. Both are created
//! on first write and never rewritten, so the dataset grows monotonically
//! across runs and duplicate runs append duplicate records.

use crate::error::Result;
use crate::records::TrainingRecord;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

/// Append-only sink for the pipeline's two output files
#[derive(Debug, Clone)]
pub struct DatasetSink {
    /// Path of the JSONL dataset file
    output_path: PathBuf,

    /// Path of the rejection log
    reject_log_path: PathBuf,
}

impl DatasetSink {
    /// Create a sink for the given output and rejection-log paths
    pub fn new(output_path: impl Into<PathBuf>, reject_log_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            reject_log_path: reject_log_path.into(),
        }
    }

    /// Append records to the dataset file, one JSON object per line
    ///
    /// Non-ASCII characters are written literally, not escaped. Ordering
    /// within the batch is preserved.
    #[instrument(skip(self, records), level = "debug")]
    pub async fn append_records(&self, records: &[TrainingRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut lines = String::new();
        for record in records {
            lines.push_str(&serde_json::to_string(record)?);
            lines.push('\n');
        }

        debug!("Appending {} records to {}", records.len(), self.output_path.display());
        append(&self.output_path, &lines).await
    }

    /// Append a rejected URL to the rejection log
    #[instrument(skip(self), level = "debug")]
    pub async fn log_rejected(&self, url: &str) -> Result<()> {
        append(&self.reject_log_path, &format!("{}\n", url)).await
    }
}

/// Append text to a file, creating it if absent
async fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(text.as_bytes()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sink_in(dir: &tempfile::TempDir) -> DatasetSink {
        DatasetSink::new(
            dir.path().join("data.jsonl"),
            dir.path().join("rejected.txt"),
        )
    }

    #[tokio::test]
    async fn records_round_trip_through_the_file() {
        let dir = tempdir().unwrap();
        let sink = sink_in(&dir);

        let records = vec![
            TrainingRecord::new("Take rest", "Drink water"),
            TrainingRecord::new("See a doctor", "Book an appointment"),
        ];
        sink.append_records(&records).await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("data.jsonl"))
            .await
            .unwrap();
        let decoded: Vec<TrainingRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(decoded, records);
        assert!(decoded.iter().all(|r| r.input.is_empty()));
    }

    #[tokio::test]
    async fn successive_writes_append_rather_than_overwrite() {
        let dir = tempdir().unwrap();
        let sink = sink_in(&dir);

        let record = vec![TrainingRecord::new("A", "1")];
        sink.append_records(&record).await.unwrap();
        sink.append_records(&record).await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("data.jsonl"))
            .await
            .unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[tokio::test]
    async fn non_ascii_text_is_written_literally() {
        let dir = tempdir().unwrap();
        let sink = sink_in(&dir);

        sink.append_records(&[TrainingRecord::new("Trinken Sie Kräutertee", "Gute Besserung")])
            .await
            .unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("data.jsonl"))
            .await
            .unwrap();
        assert!(contents.contains("Kräutertee"));
        assert!(!contents.contains("\\u"));
    }

    #[tokio::test]
    async fn rejected_urls_accumulate_one_per_line() {
        let dir = tempdir().unwrap();
        let sink = sink_in(&dir);

        sink.log_rejected("https://example.com/a").await.unwrap();
        sink.log_rejected("https://example.com/b").await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("rejected.txt"))
            .await
            .unwrap();
        assert_eq!(contents, "https://example.com/a\nhttps://example.com/b\n");
    }

    #[tokio::test]
    async fn empty_batch_creates_no_file() {
        let dir = tempdir().unwrap();
        let sink = sink_in(&dir);

        sink.append_records(&[]).await.unwrap();
        assert!(!dir.path().join("data.jsonl").exists());
    }
}

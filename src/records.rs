//! Training record parsing
//!
//! Turns the oracle's raw generated block into structured training records.
//! The block is a loose textual format: segments introduced by
//! `"Instruction: "`, each expected to carry exactly one `"Response:"`
//! delimiter. Parsing is lenient per segment: a malformed segment is skipped
//! with a diagnostic and the rest of the block still parses.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Delimiter introducing each instruction segment
const INSTRUCTION_DELIMITER: &str = "Instruction: ";

/// Delimiter separating instruction from response within a segment
const RESPONSE_DELIMITER: &str = "Response:";

/// One instruction/response pair destined for the training file
///
/// `input` is always empty; the fine-tuning format expects the field to be
/// present even when unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// The instruction text
    pub instruction: String,

    /// Always the empty string
    pub input: String,

    /// The response text
    pub output: String,
}

impl TrainingRecord {
    /// Create a record from instruction and output text
    pub fn new(instruction: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            input: String::new(),
            output: output.into(),
        }
    }
}

/// Error for a single malformed segment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The segment did not contain exactly one response delimiter
    #[error("expected exactly one \"Response:\" delimiter, found {found}")]
    ResponseDelimiter {
        /// Number of delimiters found in the segment
        found: usize,
    },

    /// One side of the split was empty after trimming
    #[error("instruction or response is empty after trimming")]
    EmptyField,
}

/// Parse one segment into a training record
///
/// The segment is everything that followed an `"Instruction: "` marker.
/// It must contain exactly one `"Response:"` delimiter, and both halves
/// must be non-empty after trimming.
pub fn parse_segment(segment: &str) -> Result<TrainingRecord, RecordError> {
    let parts: Vec<&str> = segment.split(RESPONSE_DELIMITER).collect();
    if parts.len() != 2 {
        return Err(RecordError::ResponseDelimiter {
            found: parts.len() - 1,
        });
    }

    let instruction = parts[0].trim();
    let output = parts[1].trim();
    if instruction.is_empty() || output.is_empty() {
        return Err(RecordError::EmptyField);
    }

    Ok(TrainingRecord::new(instruction, output))
}

/// Parse a generated block into training records
///
/// Splits on `"Instruction: "`, discarding any preamble before the first
/// marker, and parses each segment independently. Malformed segments are
/// logged and skipped; they never abort the block.
pub fn parse_records(block: &str) -> Vec<TrainingRecord> {
    block
        .split(INSTRUCTION_DELIMITER)
        .skip(1)
        .filter_map(|segment| match parse_segment(segment) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipped malformed block: {}", e);
                None
            }
        })
        .collect()
}

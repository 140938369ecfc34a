//! Instruction/response pair generation
//!
//! Asks the oracle to expand an article into a fixed number of
//! instruction/response pairs in a constrained plain-text format. The count
//! is a request, not a contract: the raw reply is returned as-is and the
//! parser downstream takes whatever the oracle actually produced.

use crate::error::Result;
use crate::oracle::TextOracle;
use tracing::instrument;

/// Build the generation prompt for an article
fn generation_prompt(text: &str, pairs: usize) -> String {
    format!(
        "Based on the following article, generate {pairs} instruction-response pairs \
         a hospital assistant might provide to a patient.\n\n\
         Article:\n{text}\n\n\
         Return the output in this exact format:\n\n\
         Instruction: <instruction>\n\
         Response: <response>\n\n\
         Repeat {pairs} times without any numbering or markdown formatting.\n"
    )
}

/// Generate instruction/response pairs from article text
///
/// Returns the oracle's trimmed raw reply. No validation of how many pairs
/// came back; parsing is the downstream module's concern.
#[instrument(skip(oracle, text), level = "debug")]
pub async fn generate_pairs(oracle: &dyn TextOracle, text: &str, pairs: usize) -> Result<String> {
    let reply = oracle.complete(&generation_prompt(text, pairs)).await?;
    Ok(reply.trim().to_string())
}

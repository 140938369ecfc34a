//! Binary plausibility checks via prompt templates
//!
//! The two safeguards the pipeline runs before generating from an article:
//! whether the text is topically medical, and whether it reads like it comes
//! from a reputable source. Both are the same mechanism with different
//! prompts, so they share one parametrized implementation here.

use crate::error::Result;
use crate::oracle::TextOracle;
use tracing::{debug, instrument};

/// A binary yes/no check applied to article text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Is the text medically related?
    Medical,
    /// Does the text look like it is from a reputable source?
    Reputable,
}

impl Check {
    /// Human-readable label for log lines
    pub fn label(&self) -> &'static str {
        match self {
            Check::Medical => "medical",
            Check::Reputable => "reputable",
        }
    }

    /// Build the classification prompt for a piece of article text
    fn prompt(&self, text: &str) -> String {
        let question = match self {
            Check::Medical => "Is the following text medically related?",
            Check::Reputable => "Does the following text look like it is from a reputable source?",
        };
        format!(
            "{} Answer only \"Yes\" or \"No\".\n\nText:\n{}\n",
            question, text
        )
    }

    /// Ask the oracle and reduce its free-text reply to a verdict
    ///
    /// Oracle failures propagate; an ambiguous or empty reply is a negative
    /// verdict, never an error.
    #[instrument(skip(self, oracle, text), level = "debug", fields(check = self.label()))]
    pub async fn verdict(&self, oracle: &dyn TextOracle, text: &str) -> Result<bool> {
        let reply = oracle.complete(&self.prompt(text)).await?;
        let verdict = verdict_from_reply(&reply);
        debug!("Check {:?} replied {:?} -> {}", self, reply, verdict);
        Ok(verdict)
    }
}

/// Reduce an oracle reply to a boolean verdict
///
/// True iff the trimmed, lower-cased reply starts with "yes". Everything
/// else, including an empty reply, is a negative.
pub fn verdict_from_reply(reply: &str) -> bool {
    reply.trim().to_lowercase().starts_with("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;

    struct FixedOracle(&'static str);

    #[async_trait]
    impl TextOracle for FixedOracle {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn yes_prefixed_replies_are_positive() {
        assert!(verdict_from_reply("Yes"));
        assert!(verdict_from_reply("YES."));
        assert!(verdict_from_reply("Yes, definitely"));
        assert!(verdict_from_reply("  yes  "));
    }

    #[test]
    fn anything_else_is_negative() {
        assert!(!verdict_from_reply("No"));
        assert!(!verdict_from_reply("no, this is satire"));
        assert!(!verdict_from_reply(""));
        assert!(!verdict_from_reply("Maybe yes"));
        assert!(!verdict_from_reply("It is medically related"));
    }

    #[tokio::test]
    async fn verdict_runs_the_prompt_through_the_oracle() {
        let positive = Check::Medical
            .verdict(&FixedOracle("Yes, clinical content"), "flu symptoms")
            .await
            .unwrap();
        assert!(positive);

        let negative = Check::Reputable
            .verdict(&FixedOracle("No"), "flu symptoms")
            .await
            .unwrap();
        assert!(!negative);
    }

    #[test]
    fn prompts_embed_the_text_and_the_answer_constraint() {
        let prompt = Check::Medical.prompt("some article text");
        assert!(prompt.contains("medically related"));
        assert!(prompt.contains("Answer only \"Yes\" or \"No\"."));
        assert!(prompt.contains("some article text"));

        let prompt = Check::Reputable.prompt("some article text");
        assert!(prompt.contains("reputable source"));
        assert!(prompt.contains("some article text"));
    }
}

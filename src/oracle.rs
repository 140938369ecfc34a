//! Text oracle implementation
//!
//! This module provides the client for the chat-completions API that backs
//! both the plausibility classifiers and the record generator, along with the
//! [`TextOracle`] abstraction that lets tests substitute a deterministic stub.

mod chat;
mod client;
mod http;

use crate::error::Result;
use async_trait::async_trait;

pub use client::Client;

/// Single-turn text oracle
///
/// One prompt in, the oracle's free-text reply out. Implementations make a
/// single request with no conversation history and no streaming.
#[async_trait]
pub trait TextOracle: Send + Sync {
    /// Send one user-role prompt and return the reply text
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// A [`TextOracle`] backed by a live API client and a fixed model
#[derive(Clone)]
pub struct ChatOracle {
    client: Client,
    model: String,
}

impl ChatOracle {
    /// Create an oracle bound to one model identifier
    pub fn new(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextOracle for ChatOracle {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.client.chats().complete(&self.model, prompt).await
    }
}

/// Re-export of types module for public use
pub mod prelude {
    pub use super::TextOracle;
    pub use crate::error::Error;
    pub use crate::error::Result;
}

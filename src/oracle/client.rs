//! Client implementation for the medharvest crate
//!
//! This module provides the main client interface for the chat-completions
//! API used by the classifiers and the record generator.

use crate::error::{Error, Result};
use crate::oracle::chat::ChatsService;
use crate::oracle::http::HttpClient;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Client for the chat-completions API
///
/// This is the entry point for talking to the oracle. It owns the HTTP
/// client and hands out the chats service.
#[derive(Clone)]
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Create a new client with an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let http_client = HttpClient::with_api_key(api_key.into());
        Self { http_client }
    }

    /// Create a new client from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Auth(format!("{} must be set", API_KEY_ENV)))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Access the chats service
    pub fn chats(&self) -> ChatsService {
        ChatsService::new(self.http_client.clone())
    }
}

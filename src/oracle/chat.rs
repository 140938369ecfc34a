//! Chats service for the medharvest crate
//!
//! This module provides single-turn completions against a chat-completions
//! endpoint. The pipeline only ever sends one user-role message per request,
//! so there is no session or history handling here.

use crate::error::{Error, Result};
use crate::oracle::http::HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One message in a chat exchange
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message author ("user", "assistant", ...)
    pub role: String,

    /// Text content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request for a chat completion
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    /// Model to generate with
    model: String,

    /// The conversation so far (a single user message for this pipeline)
    messages: Vec<ChatMessage>,
}

/// One completion choice in the response
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Response from the chat-completions endpoint
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// Service for single-turn chat completions
#[derive(Clone)]
pub struct ChatsService {
    /// HTTP client for making API requests
    http_client: HttpClient,
}

impl ChatsService {
    /// Create a new chats service
    pub(crate) fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Send one user-role prompt and return the first choice's message content
    #[instrument(skip(self, prompt), level = "debug")]
    pub async fn complete(
        &self,
        model: impl Into<String> + std::fmt::Debug,
        prompt: &str,
    ) -> Result<String> {
        let model = model.into();

        let request = ChatCompletionRequest {
            model: model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!("Requesting completion from model {}", model);
        let response: ChatCompletionResponse =
            self.http_client.post("v1/chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::UnexpectedResponse("Response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [
                    {"message": {"role": "assistant", "content": "Yes."}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let mut http_client = HttpClient::with_api_key("test-key".to_string());
        http_client.set_base_url(server.url());
        let chats = ChatsService::new(http_client);

        let reply = chats.complete("gpt-4o", "Is water wet?").await.unwrap();
        assert_eq!(reply, "Yes.");

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_with_no_choices_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock_server = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let mut http_client = HttpClient::with_api_key("test-key".to_string());
        http_client.set_base_url(server.url());
        let chats = ChatsService::new(http_client);

        let result = chats.complete("gpt-4o", "prompt").await;
        assert!(matches!(result, Err(Error::UnexpectedResponse(_))));
    }
}

// ABOUTME: Chat client for a local OpenAI-compatible completion server
// ABOUTME: Sends one-shot chat completions and falls back to a canned reply on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ChatModel;
use crate::config::LlmConfig;
use crate::constants::phrases::CHAT_FALLBACK;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const SERVICE_NAME: &str = "LocalLLM";

/// Connection timeout for local servers
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Local inference can be slow on CPU
const REQUEST_TIMEOUT_SECS: u64 = 120;

const SYSTEM_PROMPT: &str = "You are Spot, a friendly and upbeat workout coach. \
    Keep answers short and conversational.";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for `/chat/completions` on a local server (`GPT4All`, Ollama, ...)
#[derive(Debug, Clone)]
pub struct LocalLlmClient {
    client: Client,
    config: LlmConfig,
}

impl LocalLlmClient {
    /// Create a client for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: LlmConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Send one completion request
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the server is unreachable,
    /// answers with a non-success status, or returns no content
    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages: [
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };

        let mut request = self.client.post(self.api_url()).json(&body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            let message = if e.is_connect() {
                format!("Cannot reach {} (is the local server running?)", self.config.base_url)
            } else {
                format!("Request failed: {e}")
            };
            AppError::external_service(SERVICE_NAME, message).with_source(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!(
                    "API error ({status}): {}",
                    text.chars().take(200).collect::<String>()
                ),
            ));
        }

        let parsed: CompletionResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("Invalid response body: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_owned())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "Empty completion"))
    }
}

#[async_trait]
impl ChatModel for LocalLlmClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn reply(&self, prompt: &str) -> String {
        match self.complete(prompt).await {
            Ok(reply) => {
                debug!(reply_len = reply.len(), "Chat reply received");
                reply
            }
            Err(e) => {
                warn!(error = %e, "Chat model failed, using fallback reply");
                CHAT_FALLBACK.to_owned()
            }
        }
    }
}

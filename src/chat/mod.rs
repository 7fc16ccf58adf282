// ABOUTME: Casual conversation mode backed by a local language model
// ABOUTME: ChatModel abstraction, OpenAI-compatible client, and the talk-until-workout loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Casual Chat
//!
//! Before a workout the user may chat with the coach. Each line is answered
//! independently by a [`ChatModel`]; model failures never end the
//! conversation, they produce a fixed fallback reply instead.

use async_trait::async_trait;

/// Talk-until-workout conversation loop
pub mod conversation;
/// `OpenAI`-compatible local server client
pub mod local;

pub use conversation::{run_conversation, ConversationOutcome};
pub use local::LocalLlmClient;

/// Produces one reply per user line
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Model name for logs
    fn name(&self) -> &str;

    /// Reply to `prompt`; implementations return a fallback text on failure
    async fn reply(&self, prompt: &str) -> String;
}

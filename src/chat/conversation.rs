// ABOUTME: Free-form conversation loop run before a workout
// ABOUTME: Routes each line to the chat model until the user starts a workout or leaves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ChatModel;
use crate::console::Prompter;
use crate::errors::AppResult;
use crate::voice::Announcer;
use tracing::{debug, info};

const START_PHRASE: &str = "start workout";
const LEAVE_PHRASE: &str = "have to go";

/// How the conversation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationOutcome {
    /// Continue to the workout
    StartWorkout,
    /// The user is leaving; the program should end
    Leave,
}

/// Talk until the user says "start workout" or "have to go"
///
/// # Errors
///
/// Propagates prompter failures (for example, input closed)
pub async fn run_conversation(
    announcer: &dyn Announcer,
    prompter: &dyn Prompter,
    model: &dyn ChatModel,
) -> AppResult<ConversationOutcome> {
    announcer.speak("I'm listening. Talk to me! Say 'start workout' when you're ready.");
    info!(model = model.name(), "Casual chat started");

    loop {
        let line = prompter.ask("You: ").await?;
        let query = line.to_lowercase();

        if query.is_empty() {
            announcer.speak("Didn't catch that. Want to try again?");
        } else if query.contains(START_PHRASE) {
            announcer.speak("Alright, let's crush this session!");
            return Ok(ConversationOutcome::StartWorkout);
        } else if query.contains(LEAVE_PHRASE) {
            announcer.speak("Okay! Catch you later.");
            return Ok(ConversationOutcome::Leave);
        } else {
            debug!(query_len = query.len(), "Forwarding to chat model");
            let reply = model.reply(&query).await;
            announcer.speak(&reply);
        }
    }
}

// ABOUTME: Interactive coach flow from startup greeting to a completed or registered workout
// ABOUTME: Chat offer, body-part menu, known-workout detection, registration, and session launch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach
//!
//! One run of the coach: greet, optionally chat, pick a body part, then either
//! train a workout Spot already knows or register a new one for next time.
//! The memory document is loaded once per run and saved after every change.

use crate::chat::{run_conversation, ChatModel, ConversationOutcome, LocalLlmClient};
use crate::config::CoachConfig;
use crate::console::{ask_choice, ask_yes_no, ConsolePrompter};
use crate::errors::{AppError, AppResult};
use crate::models::{BodyPart, MemoryDocument, WorkoutRecord};
use crate::providers::TelemetrySource;
use crate::session::{
    CommandChannel, SessionClock, SessionMonitor, SessionOutcome, SessionResources, SystemClock,
};
use crate::storage::JsonFileStore;
use crate::voice::announcer_from_config;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Builds the per-session collaborators
///
/// Called once per session so each one starts with fresh telemetry and a
/// fresh command inbox.
pub trait SessionFactory: Send + Sync {
    /// Telemetry source for a new session
    fn telemetry(&self) -> Box<dyn TelemetrySource>;

    /// Command inbox for a new session
    fn commands(&self) -> CommandChannel;

    /// Elapsed-time source for a new session
    fn clock(&self) -> Box<dyn SessionClock> {
        Box::new(SystemClock::new())
    }
}

/// Simulated telemetry with commands typed on stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveSessionFactory {
    seed: Option<u64>,
}

impl LiveSessionFactory {
    /// Factory with an optional telemetry seed
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl SessionFactory for LiveSessionFactory {
    #[cfg(feature = "synthetic-telemetry")]
    fn telemetry(&self) -> Box<dyn TelemetrySource> {
        use crate::providers::SyntheticTelemetry;
        match self.seed {
            Some(seed) => Box::new(SyntheticTelemetry::seeded(seed)),
            None => Box::new(SyntheticTelemetry::from_entropy()),
        }
    }

    #[cfg(not(feature = "synthetic-telemetry"))]
    fn telemetry(&self) -> Box<dyn TelemetrySource> {
        use crate::models::FormSignal;
        use crate::providers::ScriptedTelemetry;
        if self.seed.is_some() {
            warn!("Telemetry seed ignored without the synthetic-telemetry feature");
        }
        Box::new(ScriptedTelemetry::new(FormSignal::ALL.to_vec()))
    }

    fn commands(&self) -> CommandChannel {
        CommandChannel::stdin()
    }
}

/// How a coach run ended
#[derive(Debug, Clone, PartialEq)]
pub enum CoachOutcome {
    /// The user left during casual chat
    Left,
    /// A new workout was registered for next time
    Registered {
        /// Body part it was registered under
        part: BodyPart,
        /// Name as typed
        name: String,
    },
    /// A known workout was trained
    Trained {
        /// Body part trained
        part: BodyPart,
        /// Stored workout key
        workout: String,
        /// Session result
        session: SessionOutcome,
    },
}

/// The interactive coach
pub struct Coach {
    resources: SessionResources,
    sessions: Arc<dyn SessionFactory>,
    chat: Option<Arc<dyn ChatModel>>,
    tick_interval: Duration,
}

impl Coach {
    /// Coach with no chat model and the standard tick period
    pub fn new(resources: SessionResources, sessions: Arc<dyn SessionFactory>) -> Self {
        Self {
            resources,
            sessions,
            chat: None,
            tick_interval: CoachConfig::default().tick_interval,
        }
    }

    /// Production wiring: JSON memory file, stdin prompts, configured voice and chat
    ///
    /// # Errors
    ///
    /// Returns an error if the chat HTTP client cannot be created
    pub fn from_config(config: &CoachConfig) -> AppResult<Self> {
        let resources = SessionResources::new(
            announcer_from_config(&config.voice),
            Arc::new(ConsolePrompter),
            Arc::new(JsonFileStore::new(config.memory_file.clone())),
        );
        let chat = LocalLlmClient::new(config.llm.clone())?;

        Ok(Self::new(resources, Arc::new(LiveSessionFactory::new(config.telemetry_seed)))
            .with_chat(Arc::new(chat))
            .with_tick_interval(config.tick_interval))
    }

    /// Offer casual chat before the workout using `model`
    #[must_use]
    pub fn with_chat(mut self, model: Arc<dyn ChatModel>) -> Self {
        self.chat = Some(model);
        self
    }

    /// Skip the chat offer
    #[must_use]
    pub fn without_chat(mut self) -> Self {
        self.chat = None;
        self
    }

    /// Wall-clock pause between session ticks
    #[must_use]
    pub const fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Run the whole flow once
    ///
    /// # Errors
    ///
    /// Any storage, input, or session failure; each is announced before it is returned
    #[instrument(skip(self), fields(store = self.resources.store.name()))]
    pub async fn run(&self) -> AppResult<CoachOutcome> {
        self.resources.announcer.open();
        let outcome = self.flow().await;
        self.resources.announcer.close();
        if let Ok(outcome) = &outcome {
            info!(?outcome, "Coach run finished");
        }
        outcome
    }

    async fn flow(&self) -> AppResult<CoachOutcome> {
        let announcer = &self.resources.announcer;
        let prompter = self.resources.prompter.as_ref();

        announcer.speak("Skin contact detected.");
        announcer.speak("Activated and ready!");

        if let Some(model) = &self.chat {
            let chat_first = ask_yes_no(
                prompter,
                "Do you want to chat with me before starting your workout?",
            )
            .await
            .map_err(|e| self.stopped(e))?;
            if chat_first {
                let ended = run_conversation(announcer.as_ref(), prompter, model.as_ref())
                    .await
                    .map_err(|e| self.stopped(e))?;
                if ended == ConversationOutcome::Leave {
                    return Ok(CoachOutcome::Left);
                }
            }
        }

        let mut document = self
            .resources
            .store
            .load()
            .await
            .map_err(|e| self.stopped(e))?;
        let part = self.select_body_part(&document).await?;

        let known = ask_yes_no(prompter, "Are you doing a workout I know?")
            .await
            .map_err(|e| self.stopped(e))?;
        if known {
            let name = prompter
                .ask("Enter detected workout name: ")
                .await
                .map_err(|e| self.stopped(e))?;
            if let Some(key) = document.find_workout_key(part, &name).map(str::to_owned) {
                return self.train(part, key, &mut document).await;
            }
            announcer.speak("Hmm, I don't seem to have that workout saved under this body part.");
        }

        self.register(part, &mut document).await
    }

    async fn select_body_part(&self, document: &MemoryDocument) -> AppResult<BodyPart> {
        let parts: Vec<BodyPart> = document.body_parts().collect();
        let question = "Which body part are we training today?";
        self.resources.announcer.speak(question);
        let index = ask_choice(self.resources.prompter.as_ref(), question, &parts)
            .await
            .map_err(|e| self.stopped(e))?;
        parts
            .get(index)
            .copied()
            .ok_or_else(|| self.stopped(AppError::internal("Body part menu out of range")))
    }

    async fn train(
        &self,
        part: BodyPart,
        key: String,
        document: &mut MemoryDocument,
    ) -> AppResult<CoachOutcome> {
        let announcer = &self.resources.announcer;
        let record = document
            .workout_mut(part, &key)
            .ok_or_else(|| self.stopped(AppError::not_found(format!("Workout {key}"))))?;

        announcer.speak(&format!("Detected: {key}"));
        if record.is_first_session() {
            announcer.speak(&record.description);
        }
        record.times_done = record.times_done.saturating_add(1);
        self.resources
            .store
            .save(document)
            .await
            .map_err(|e| self.stopped(e))?;

        let monitor = SessionMonitor::new(
            self.resources.clone(),
            self.sessions.telemetry(),
            self.sessions.commands(),
        )
        .with_clock(self.sessions.clock())
        .with_tick_interval(self.tick_interval);

        // The monitor announces its own failures
        let session = monitor.run(part, &key, document).await?;
        Ok(CoachOutcome::Trained {
            part,
            workout: key,
            session,
        })
    }

    async fn register(
        &self,
        part: BodyPart,
        document: &mut MemoryDocument,
    ) -> AppResult<CoachOutcome> {
        let announcer = &self.resources.announcer;
        let prompter = self.resources.prompter.as_ref();
        announcer.speak("This is new. Tell me about it.");

        let name = loop {
            let name = prompter
                .ask("Workout name: ")
                .await
                .map_err(|e| self.stopped(e))?;
            if !name.is_empty() {
                break name;
            }
            announcer.speak("I need a name for this workout.");
        };
        let muscles = prompter
            .ask("Muscle groups it targets: ")
            .await
            .map_err(|e| self.stopped(e))?;
        let description = prompter
            .ask("How does it help (short explanation): ")
            .await
            .map_err(|e| self.stopped(e))?;
        let tip = prompter
            .ask("Any tip for this workout?: ")
            .await
            .map_err(|e| self.stopped(e))?;

        let fresh = WorkoutRecord::new(muscles, description, tip);
        // Re-registering an existing name updates it in place; its history stays
        let key = match document.find_workout_key(part, &name).map(str::to_owned) {
            Some(existing) => {
                if let Some(record) = document.workout_mut(part, &existing) {
                    warn!(
                        workout = %existing,
                        sessions = record.history.len(),
                        "Updating existing workout registration"
                    );
                    record.muscle_groups = fresh.muscle_groups;
                    record.description = fresh.description;
                    record.tip = fresh.tip;
                }
                existing
            }
            None => {
                document.insert_workout(part, name.clone(), fresh);
                name
            }
        };
        self.resources
            .store
            .save(document)
            .await
            .map_err(|e| self.stopped(e))?;

        info!(%part, workout = %key, "Workout registered");
        announcer.speak(&format!(
            "Got it. I've added {key} to my memory. I'll guide you next time."
        ));
        Ok(CoachOutcome::Registered { part, name: key })
    }

    fn stopped(&self, error: AppError) -> AppError {
        warn!(code = ?error.code, error = %error, "Coach stopped");
        self.resources
            .announcer
            .speak(&format!("Session stopped: {}", error.message));
        error
    }
}

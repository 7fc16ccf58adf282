// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, scripted collaborators, and deterministic session wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `spot_coach`

use async_trait::async_trait;
use chrono::NaiveDate;
use spot_coach::{
    chat::ChatModel,
    constants::phrases,
    coach::SessionFactory,
    console::ScriptedPrompter,
    models::{BodyPart, FormSignal, MemoryDocument, TelemetrySample, WorkoutRecord},
    providers::{ScriptedTelemetry, TelemetrySource},
    session::{
        CommandChannel, CommandSender, SessionClock, SessionMonitor, SessionResources,
        SteppedClock,
    },
    storage::InMemoryStore,
    voice::{Announcer, RecordingAnnouncer},
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const TEST_PART: BodyPart = BodyPart::Arms;
pub const TEST_WORKOUT: &str = "Bicep Curl";
pub const TEST_TIP: &str = "Keep your elbows pinned.";
pub const TICK: Duration = Duration::from_secs(2);

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Template document with one workout registered under Arms
pub fn document_with_workout() -> MemoryDocument {
    let mut document = MemoryDocument::template();
    let mut record = WorkoutRecord::new("Biceps", "Builds arm strength.", TEST_TIP);
    record.times_done = 0;
    document.insert_workout(TEST_PART, TEST_WORKOUT, record);
    document
}

/// Telemetry source that types command lines while producing chosen ticks
///
/// `commands[n]` is sent during the (n+1)-th call to `next`, before the sample
/// for that tick is returned, mimicking a user typing mid-tick.
pub struct CommandingTelemetry {
    inner: ScriptedTelemetry,
    sender: CommandSender,
    commands: HashMap<usize, Vec<String>>,
    offer_answers: VecDeque<String>,
    calls: usize,
}

impl CommandingTelemetry {
    pub fn new(signals: Vec<FormSignal>, sender: CommandSender) -> Self {
        Self {
            inner: ScriptedTelemetry::new(signals),
            sender,
            commands: HashMap::new(),
            offer_answers: VecDeque::new(),
            calls: 0,
        }
    }

    /// Send `line` during tick number `tick` (1-based)
    #[must_use]
    pub fn type_at(mut self, tick: usize, line: &str) -> Self {
        self.commands.entry(tick).or_default().push(line.to_owned());
        self
    }

    /// Type `line` once the next tip offer is on screen
    #[must_use]
    pub fn answer_offer(mut self, line: &str) -> Self {
        self.offer_answers.push_back(line.to_owned());
        self
    }
}

/// Announcer that records everything and types the queued answer whenever
/// the tip offer is shown
pub struct OfferAnsweringAnnouncer {
    inner: RecordingAnnouncer,
    sender: CommandSender,
    answers: Mutex<VecDeque<String>>,
}

impl Announcer for OfferAnsweringAnnouncer {
    fn speak(&self, text: &str) {
        self.inner.speak(text);
    }

    fn show(&self, text: &str) {
        self.inner.show(text);
        if text == phrases::TIP_OFFER {
            if let Some(answer) = self.answers.lock().unwrap().pop_front() {
                self.sender.send(answer);
            }
        }
    }
}

impl TelemetrySource for CommandingTelemetry {
    fn name(&self) -> &'static str {
        "commanding-scripted"
    }

    fn next(&mut self, previous: Option<&TelemetrySample>, elapsed: Duration) -> TelemetrySample {
        self.calls += 1;
        if let Some(lines) = self.commands.remove(&self.calls) {
            for line in lines {
                self.sender.send(line);
            }
        }
        self.inner.next(previous, elapsed)
    }
}

/// Recording announcer, scripted prompter, and in-memory store bundled together
pub struct TestHarness {
    pub announcer: RecordingAnnouncer,
    pub prompter: Arc<ScriptedPrompter>,
    pub store: Arc<InMemoryStore>,
}

impl TestHarness {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        init_test_logging();
        Self {
            announcer: RecordingAnnouncer::new(),
            prompter: Arc::new(ScriptedPrompter::new(answers)),
            store: Arc::new(InMemoryStore::new()),
        }
    }

    pub fn resources(&self) -> SessionResources {
        SessionResources::new(
            Arc::new(self.announcer.clone()),
            self.prompter.clone(),
            self.store.clone(),
        )
    }

    /// Monitor with a zero-length pause, a 2-second stepped clock, and a fixed date
    pub fn monitor(&self, mut telemetry: CommandingTelemetry, commands: CommandChannel) -> SessionMonitor {
        let announcer = OfferAnsweringAnnouncer {
            inner: self.announcer.clone(),
            sender: telemetry.sender.clone(),
            answers: Mutex::new(std::mem::take(&mut telemetry.offer_answers)),
        };
        let resources = SessionResources::new(
            Arc::new(announcer),
            self.prompter.clone(),
            self.store.clone(),
        );
        SessionMonitor::new(resources, Box::new(telemetry), commands)
            .with_clock(SteppedClock::new(TICK))
            .with_tick_interval(Duration::ZERO)
            .with_date(test_date())
    }
}

/// Session factory handing out one prepared scripted session
///
/// The coach asks for telemetry before the command inbox, so the inbox is
/// parked between the two calls.
pub struct ScriptedSessionFactory {
    telemetry: Mutex<Option<CommandingTelemetry>>,
    commands: Mutex<Option<CommandChannel>>,
}

impl ScriptedSessionFactory {
    pub fn new(telemetry: CommandingTelemetry, commands: CommandChannel) -> Self {
        Self {
            telemetry: Mutex::new(Some(telemetry)),
            commands: Mutex::new(Some(commands)),
        }
    }

    /// Factory for flows that must never start a session
    pub fn unused() -> Self {
        Self {
            telemetry: Mutex::new(None),
            commands: Mutex::new(None),
        }
    }
}

impl SessionFactory for ScriptedSessionFactory {
    fn telemetry(&self) -> Box<dyn TelemetrySource> {
        Box::new(
            self.telemetry
                .lock()
                .unwrap()
                .take()
                .expect("no scripted session prepared"),
        )
    }

    fn commands(&self) -> CommandChannel {
        self.commands
            .lock()
            .unwrap()
            .take()
            .expect("no scripted command inbox prepared")
    }

    fn clock(&self) -> Box<dyn SessionClock> {
        Box::new(SteppedClock::new(TICK))
    }
}

/// Chat model answering from a fixed script and recording prompts
#[derive(Default)]
pub struct CannedChat {
    replies: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl CannedChat {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().rev().map(|r| (*r).to_owned()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for CannedChat {
    fn name(&self) -> &str {
        "canned"
    }

    async fn reply(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| spot_coach::constants::phrases::CHAT_FALLBACK.to_owned())
    }
}

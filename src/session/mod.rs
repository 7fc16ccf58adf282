// ABOUTME: Live workout session: command inbox, clock, rendering, and the tick-loop monitor
// ABOUTME: Shared capability bundle injected into sessions and the coach flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Session
//!
//! A session runs a fixed-period tick loop that renders telemetry, feeds the
//! form streak tracker, and polls a non-blocking command inbox. Typing the
//! end-of-session phrase moves it to the summary, where set data is collected
//! and the workout's history and progress are saved in a single write.

/// Elapsed-time sources
pub mod clock;
/// Background command reader and inbox
pub mod command_channel;
/// Interpretation of typed lines
pub mod commands;
/// Printed and spoken text
pub mod display;
/// The session state machine
pub mod monitor;

pub use clock::{SessionClock, SteppedClock, SystemClock};
pub use command_channel::{CommandChannel, CommandSender};
pub use commands::SessionCommand;
pub use monitor::{SessionMonitor, SessionOutcome};

use crate::console::Prompter;
use crate::storage::MemoryStore;
use crate::voice::Announcer;
use std::sync::Arc;

/// Capabilities shared by the coach flow and every session it starts
#[derive(Clone)]
pub struct SessionResources {
    /// Spoken/printed output
    pub announcer: Arc<dyn Announcer>,
    /// One-answer questions
    pub prompter: Arc<dyn Prompter>,
    /// Memory document persistence
    pub store: Arc<dyn MemoryStore>,
}

impl SessionResources {
    /// Bundle the three capabilities
    pub fn new(
        announcer: Arc<dyn Announcer>,
        prompter: Arc<dyn Prompter>,
        store: Arc<dyn MemoryStore>,
    ) -> Self {
        Self {
            announcer,
            prompter,
            store,
        }
    }
}

impl std::fmt::Debug for SessionResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResources")
            .field("store", &self.store.name())
            .finish_non_exhaustive()
    }
}

// ABOUTME: Main library entry point for the Spot voice-guided workout coach
// ABOUTME: Wires the live session monitor, memory store, voice capabilities, and chat mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Spot Coach
//!
//! An interactive workout coach that remembers exercises per body part, logs
//! every session, and gives live (simulated) form feedback while you train.
//!
//! ## Features
//!
//! - **Live session monitor**: periodic telemetry with heart rate, calories, and
//!   a colour-coded form signal, while typed commands are accepted concurrently
//! - **Coaching streaks**: a tip offer after repeated bad form, praise after
//!   repeated good form
//! - **Progress tracking**: progressive-overload trend and strength status
//!   computed from each workout's history
//! - **Pluggable capabilities**: voice output, prompts, storage, telemetry, and
//!   the chat model are all injected traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spot_coach::config::CoachConfig;
//! use spot_coach::coach::Coach;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CoachConfig::from_env()?;
//! let coach = Coach::from_config(&config)?;
//! coach.run().await?;
//! # Ok(())
//! # }
//! ```

/// Unified error handling (re-exported from spot-core)
pub mod errors {
    pub use spot_core::errors::*;
}

/// Data models (re-exported from spot-core)
pub use spot_core::models;

/// Application constants (re-exported from spot-core)
pub use spot_core::constants;

/// Progress and streak analysis (re-exported from spot-intelligence)
pub use spot_intelligence as intelligence;

/// Telemetry sources (re-exported from spot-providers)
pub use spot_providers as providers;

/// Casual conversation backed by a local language model
pub mod chat;

/// Interactive coach flow: body-part selection, workout registration, sessions
pub mod coach;

/// Environment-based configuration
pub mod config;

/// Synchronous user prompts
pub mod console;

/// Structured logging setup
pub mod logging;

/// Live workout session: command channel, clock, and the session monitor
pub mod session;

/// Memory document persistence
pub mod storage;

/// Spoken and printed output
pub mod voice;

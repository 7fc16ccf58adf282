// ABOUTME: Configuration management module for coach settings
// ABOUTME: Re-exports the environment-based configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Spot coach
//!
//! All settings come from environment variables (optionally loaded from a
//! `.env` file); the `spot` binary layers command-line overrides on top.

/// Environment variable configuration
pub mod environment;

pub use environment::{CoachConfig, LlmConfig, VoiceConfig};

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Telemetry bounds, coaching thresholds, phrases, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Heart-rate simulation bounds
pub mod heart_rate {
    /// Lowest heart rate a sample may report (bpm)
    pub const MIN_BPM: u16 = 60;
    /// Highest heart rate a sample may report (bpm)
    pub const MAX_BPM: u16 = 180;
    /// Heart rate of the first sample in a session (bpm)
    pub const START_BPM: u16 = 90;
    /// Smallest per-tick heart-rate step (inclusive)
    pub const STEP_MIN: i32 = -2;
    /// Largest per-tick heart-rate step (inclusive)
    pub const STEP_MAX: i32 = 3;
}

/// Calorie accumulation
pub mod calories {
    /// Smallest per-tick calorie increment
    pub const STEP_MIN: f64 = 0.1;
    /// Largest per-tick calorie increment
    pub const STEP_MAX: f64 = 0.3;
}

/// Session loop timing and coaching thresholds
pub mod session {
    /// Default wall-clock period between ticks (milliseconds)
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;
    /// Consecutive same-colour samples that trigger a coaching event
    pub const STREAK_THRESHOLD: u32 = 3;
    /// Phrase that ends a running session (matched trimmed, case-insensitive)
    pub const END_COMMAND: &str = "end workout";
    /// Phrases that ask for the stored tip mid-session
    pub const TIP_COMMANDS: &[&str] = &["tip", "need a tip"];
}

/// Spoken and printed coaching phrases
pub mod phrases {
    /// Tip used when a workout has none stored
    pub const DEFAULT_TIP: &str = "Focus on controlled motion. Think about the muscles in your head to have mind-muscle connection.";
    /// Announced when three RED samples arrive in a row
    pub const FORM_WARNING: &str = "Form looks off. Need help?";
    /// Question asked after a form warning
    pub const TIP_OFFER: &str = "You're struggling. Want a tip? (yes/no)";
    /// Praise after three GREEN samples in a row
    pub const ENCOURAGEMENT: &str = "You're doing great! Keep it up.";
    /// Announced when the monitor starts
    pub const MONITOR_START: &str = "Monitoring form. Green is good. Red is bad.";
    /// Announced when the end-of-session command is observed
    pub const WORKOUT_ENDED: &str = "Workout ended. Great job today!";
    /// Reply used when the chat model cannot answer
    pub const CHAT_FALLBACK: &str = "Oops, I had a brain freeze. Try again?";
}

/// Environment variable names read by the coach configuration
pub mod env_config {
    /// Path of the JSON memory document
    pub const MEMORY_FILE: &str = "SPOT_MEMORY_FILE";
    /// Tick period in milliseconds
    pub const TICK_INTERVAL_MS: &str = "SPOT_TICK_INTERVAL_MS";
    /// Seed for reproducible synthetic telemetry
    pub const TELEMETRY_SEED: &str = "SPOT_TELEMETRY_SEED";
    /// Text-to-speech program
    pub const VOICE_COMMAND: &str = "SPOT_VOICE_COMMAND";
    /// Speech rate passed to the text-to-speech program
    pub const VOICE_RATE: &str = "SPOT_VOICE_RATE";
    /// Base URL of the local OpenAI-compatible chat endpoint
    pub const LOCAL_LLM_BASE_URL: &str = "LOCAL_LLM_BASE_URL";
    /// Model served by the local chat endpoint
    pub const LOCAL_LLM_MODEL: &str = "LOCAL_LLM_MODEL";
    /// Optional API key for the chat endpoint
    pub const LOCAL_LLM_API_KEY: &str = "LOCAL_LLM_API_KEY";
}

/// Default values for configuration
pub mod defaults {
    /// Memory document file name
    pub const MEMORY_FILE: &str = "spot_memory.json";
    /// Default text-to-speech rate (words per minute)
    pub const VOICE_RATE: u32 = 160;
    /// GPT4All local API server
    pub const LOCAL_LLM_BASE_URL: &str = "http://localhost:4891/v1";
    /// Model loaded by the local API server
    pub const LOCAL_LLM_MODEL: &str = "Llama 3.2 3B Instruct";
}

/// Service names for structured logging
pub mod service_names {
    /// The coach binary
    pub const SPOT_COACH: &str = "spot-coach";
}

// ABOUTME: Environment configuration management for the coach runtime
// ABOUTME: Reads memory path, tick period, telemetry seed, voice, and local LLM settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config, session};
use crate::errors::AppError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Text-to-speech settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Program invoked with the text as its last argument (`None` = text only)
    pub command: Option<String>,
    /// Speech rate in words per minute
    pub rate: u32,
}

/// Local OpenAI-compatible chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL including the `/v1` prefix
    pub base_url: String,
    /// Model name sent with each request
    pub model: String,
    /// Optional bearer token
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::LOCAL_LLM_BASE_URL.to_owned(),
            model: defaults::LOCAL_LLM_MODEL.to_owned(),
            api_key: None,
        }
    }
}

/// Complete coach configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// JSON memory document path
    pub memory_file: PathBuf,
    /// Wall-clock period between session ticks
    pub tick_interval: Duration,
    /// Seed for reproducible synthetic telemetry
    pub telemetry_seed: Option<u64>,
    /// Voice output
    pub voice: VoiceConfig,
    /// Casual chat model
    pub llm: LlmConfig,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            memory_file: PathBuf::from(defaults::MEMORY_FILE),
            tick_interval: Duration::from_millis(session::DEFAULT_TICK_INTERVAL_MS),
            telemetry_seed: None,
            voice: VoiceConfig {
                command: None,
                rate: defaults::VOICE_RATE,
            },
            llm: LlmConfig::default(),
        }
    }
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` [`AppError`] if a numeric variable is set but
    /// cannot be parsed
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let config = Self {
            memory_file: PathBuf::from(env_var_or(env_config::MEMORY_FILE, defaults::MEMORY_FILE)),
            tick_interval: Duration::from_millis(
                parse_env(env_config::TICK_INTERVAL_MS)?
                    .unwrap_or(session::DEFAULT_TICK_INTERVAL_MS),
            ),
            telemetry_seed: parse_env(env_config::TELEMETRY_SEED)?,
            voice: VoiceConfig {
                command: non_empty_env(env_config::VOICE_COMMAND),
                rate: parse_env(env_config::VOICE_RATE)?.unwrap_or(defaults::VOICE_RATE),
            },
            llm: LlmConfig {
                base_url: env_var_or(env_config::LOCAL_LLM_BASE_URL, defaults::LOCAL_LLM_BASE_URL),
                model: env_var_or(env_config::LOCAL_LLM_MODEL, defaults::LOCAL_LLM_MODEL),
                api_key: non_empty_env(env_config::LOCAL_LLM_API_KEY),
            },
        };

        info!(
            memory_file = %config.memory_file.display(),
            tick_interval_ms = config.tick_interval.as_millis(),
            seeded = config.telemetry_seed.is_some(),
            voice = config.voice.command.as_deref().unwrap_or("off"),
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Environment variable with surrounding whitespace removed, `None` when unset or blank
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an optional environment variable, failing when it is set but malformed
fn parse_env<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty_env(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| {
                AppError::config(format!("Invalid {key} value: {raw}")).with_source(e)
            })
        })
        .transpose()
}

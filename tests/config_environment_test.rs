// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates defaults, environment overrides, and rejection of malformed numeric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use spot_coach::config::CoachConfig;
use spot_coach::constants::{defaults, env_config};
use spot_coach::errors::{AppError, ErrorCode};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: &[&str] = &[
    env_config::MEMORY_FILE,
    env_config::TICK_INTERVAL_MS,
    env_config::TELEMETRY_SEED,
    env_config::VOICE_COMMAND,
    env_config::VOICE_RATE,
    env_config::LOCAL_LLM_BASE_URL,
    env_config::LOCAL_LLM_MODEL,
    env_config::LOCAL_LLM_API_KEY,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = CoachConfig::from_env().unwrap();

    assert_eq!(config, CoachConfig::default());
    assert_eq!(config.memory_file, PathBuf::from(defaults::MEMORY_FILE));
    assert_eq!(config.tick_interval, Duration::from_secs(2));
    assert_eq!(config.telemetry_seed, None);
    assert_eq!(config.voice.command, None);
    assert_eq!(config.voice.rate, defaults::VOICE_RATE);
    assert_eq!(config.llm.base_url, defaults::LOCAL_LLM_BASE_URL);
    assert_eq!(config.llm.api_key, None);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_config::MEMORY_FILE, "/tmp/spot/memory.json");
    env::set_var(env_config::TICK_INTERVAL_MS, "250");
    env::set_var(env_config::TELEMETRY_SEED, "42");
    env::set_var(env_config::VOICE_COMMAND, "espeak -s {rate}");
    env::set_var(env_config::VOICE_RATE, "180");
    env::set_var(env_config::LOCAL_LLM_MODEL, "tiny-llama");
    env::set_var(env_config::LOCAL_LLM_API_KEY, "   ");

    let config = CoachConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.memory_file, PathBuf::from("/tmp/spot/memory.json"));
    assert_eq!(config.tick_interval, Duration::from_millis(250));
    assert_eq!(config.telemetry_seed, Some(42));
    assert_eq!(config.voice.command.as_deref(), Some("espeak -s {rate}"));
    assert_eq!(config.voice.rate, 180);
    assert_eq!(config.llm.model, "tiny-llama");
    // Blank secrets count as unset
    assert_eq!(config.llm.api_key, None);
}

#[test]
#[serial]
fn test_malformed_number_is_config_error() {
    clear_env();
    env::set_var(env_config::TICK_INTERVAL_MS, "fast");

    let err = CoachConfig::from_env().unwrap_err();
    clear_env();

    let app_error = err.downcast_ref::<AppError>().unwrap();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert!(app_error.message.contains(env_config::TICK_INTERVAL_MS));
}

#[test]
#[serial]
fn test_api_key_is_not_serialized() {
    clear_env();
    env::set_var(env_config::LOCAL_LLM_API_KEY, "secret-token");
    let config = CoachConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.llm.api_key.as_deref(), Some("secret-token"));
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("secret-token"));
}

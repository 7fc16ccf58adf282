// ABOUTME: Telemetry source implementations for live workout sessions
// ABOUTME: Core source trait, the randomized simulator, and a deterministic scripted replay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Telemetry sources and core abstractions.
//!
//! The session monitor only sees the [`TelemetrySource`] trait, so a real
//! sensor adapter can replace the simulator without touching the loop.

// Re-export spot-core modules so sources can keep `use crate::models::*` etc.
pub use spot_core::constants;
pub use spot_core::models;

/// Core telemetry source trait and shared step arithmetic
pub mod core;
/// Deterministic replay of fixed signals and steps
pub mod scripted;
/// Randomized simulator backed by a seedable RNG
#[cfg(feature = "provider-synthetic")]
pub mod synthetic;

pub use core::{accumulate_calories, step_heart_rate, TelemetrySource};
pub use scripted::ScriptedTelemetry;
#[cfg(feature = "provider-synthetic")]
pub use synthetic::SyntheticTelemetry;

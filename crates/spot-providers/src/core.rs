// ABOUTME: Core telemetry source trait shared by simulated and sensor-backed feeds
// ABOUTME: Provides the bounded heart-rate walk and calorie accumulation arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::heart_rate::{MAX_BPM, MIN_BPM};
use crate::models::TelemetrySample;
use std::time::Duration;

/// A feed producing one telemetry sample per session tick
///
/// Implementations derive each sample from the previous one (or their own
/// starting state when `previous` is `None`) and the elapsed session time
/// measured by the monitor.
pub trait TelemetrySource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce the sample for the current tick
    fn next(&mut self, previous: Option<&TelemetrySample>, elapsed: Duration) -> TelemetrySample;
}

impl<T: TelemetrySource + ?Sized> TelemetrySource for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next(&mut self, previous: Option<&TelemetrySample>, elapsed: Duration) -> TelemetrySample {
        (**self).next(previous, elapsed)
    }
}

/// Apply a signed step to a heart rate, clamped to the allowed range
#[must_use]
pub fn step_heart_rate(current: u16, step: i32) -> u16 {
    let next = (i32::from(current) + step).clamp(i32::from(MIN_BPM), i32::from(MAX_BPM));
    // Clamped into the u16 range above
    u16::try_from(next).unwrap_or(MIN_BPM)
}

/// Add a per-tick calorie increment, keeping 2-decimal precision
///
/// Negative or non-finite increments are ignored so the total never decreases.
#[must_use]
pub fn accumulate_calories(current: f64, increment: f64) -> f64 {
    let increment = if increment.is_finite() {
        round_2(increment).max(0.0)
    } else {
        0.0
    };
    round_2(current + increment)
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

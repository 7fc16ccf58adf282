// ABOUTME: Deterministic telemetry source replaying fixed form signals and steps
// ABOUTME: Used by tests and demos that need a predictable session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::heart_rate;
use crate::core::{accumulate_calories, step_heart_rate, TelemetrySource};
use crate::models::{FormSignal, TelemetrySample};
use std::time::Duration;

/// Replays a fixed script of form signals, cycling when it runs out
///
/// Heart-rate steps and the calorie increment are also scripted so every
/// field of every sample is known in advance.
#[derive(Debug, Clone)]
pub struct ScriptedTelemetry {
    signals: Vec<FormSignal>,
    heart_rate_steps: Vec<i32>,
    calorie_step: f64,
    tick: usize,
}

impl ScriptedTelemetry {
    /// Replay the given signals with a flat heart rate and 0.2 kcal per tick
    #[must_use]
    pub fn new(signals: Vec<FormSignal>) -> Self {
        Self {
            signals,
            heart_rate_steps: vec![0],
            calorie_step: 0.2,
            tick: 0,
        }
    }

    /// Replace the heart-rate steps applied each tick (cycled)
    #[must_use]
    pub fn with_heart_rate_steps(mut self, steps: Vec<i32>) -> Self {
        self.heart_rate_steps = steps;
        self
    }

    /// Replace the per-tick calorie increment
    #[must_use]
    pub fn with_calorie_step(mut self, step: f64) -> Self {
        self.calorie_step = step;
        self
    }

    /// Samples produced so far
    #[must_use]
    pub const fn ticks(&self) -> usize {
        self.tick
    }

    fn cycled<T: Copy>(items: &[T], index: usize, fallback: T) -> T {
        if items.is_empty() {
            fallback
        } else {
            items[index % items.len()]
        }
    }
}

impl TelemetrySource for ScriptedTelemetry {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn next(&mut self, previous: Option<&TelemetrySample>, elapsed: Duration) -> TelemetrySample {
        let (current_hr, current_calories) =
            previous.map_or((heart_rate::START_BPM, 0.0), |p| (p.heart_rate, p.calories_burned));
        let signal = Self::cycled(&self.signals, self.tick, FormSignal::Yellow);
        let step = Self::cycled(&self.heart_rate_steps, self.tick, 0);
        self.tick += 1;

        TelemetrySample {
            elapsed_seconds: elapsed.as_secs(),
            heart_rate: step_heart_rate(current_hr, step),
            calories_burned: accumulate_calories(current_calories, self.calorie_step),
            form_signal: signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_and_cycles_signals() {
        let mut source = ScriptedTelemetry::new(vec![FormSignal::Red, FormSignal::Green])
            .with_heart_rate_steps(vec![3]);
        let first = source.next(None, Duration::ZERO);
        let second = source.next(Some(&first), Duration::from_secs(2));
        let third = source.next(Some(&second), Duration::from_secs(4));

        assert_eq!(first.form_signal, FormSignal::Red);
        assert_eq!(second.form_signal, FormSignal::Green);
        assert_eq!(third.form_signal, FormSignal::Red);
        assert_eq!(third.heart_rate, 99);
        assert!((third.calories_burned - 0.6).abs() < 1e-9);
        assert_eq!(third.elapsed_seconds, 4);
        assert_eq!(source.ticks(), 3);
    }

    #[test]
    fn test_empty_script_yields_yellow() {
        let mut source = ScriptedTelemetry::new(Vec::new());
        assert_eq!(source.next(None, Duration::ZERO).form_signal, FormSignal::Yellow);
    }
}

// ABOUTME: Randomized telemetry simulator for demo sessions and development
// ABOUTME: Bounded heart-rate random walk, monotonic calories, and uniformly drawn form signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Synthetic Telemetry
//!
//! Stands in for a wearable until a real sensor feed is wired up:
//!
//! - heart rate starts at 90 bpm and moves by a uniform integer step in
//!   `[-2, 3]` each tick, clamped to `[60, 180]`
//! - calories grow by a uniform amount in `[0.1, 0.3]`, rounded to 2 decimals
//! - the form signal is drawn uniformly each tick, independent of history
//!
//! Seed it with [`SyntheticTelemetry::seeded`] for reproducible sessions.

use crate::constants::{calories, heart_rate};
use crate::core::{accumulate_calories, step_heart_rate, TelemetrySource};
use crate::models::{FormSignal, TelemetrySample};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::trace;

/// Randomized telemetry source
#[derive(Debug, Clone)]
pub struct SyntheticTelemetry<R = ChaCha8Rng> {
    rng: R,
}

impl SyntheticTelemetry<ChaCha8Rng> {
    /// Simulator seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Simulator producing the same sequence for the same seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticTelemetry<R> {
    /// Simulator driven by a caller-supplied RNG
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send + Sync> TelemetrySource for SyntheticTelemetry<R> {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn next(&mut self, previous: Option<&TelemetrySample>, elapsed: Duration) -> TelemetrySample {
        let (current_hr, current_calories) =
            previous.map_or((heart_rate::START_BPM, 0.0), |p| (p.heart_rate, p.calories_burned));

        let step = self.rng.gen_range(heart_rate::STEP_MIN..=heart_rate::STEP_MAX);
        let increment = self.rng.gen_range(calories::STEP_MIN..=calories::STEP_MAX);
        let form_signal = FormSignal::ALL[self.rng.gen_range(0..FormSignal::ALL.len())];

        let sample = TelemetrySample {
            elapsed_seconds: elapsed.as_secs(),
            heart_rate: step_heart_rate(current_hr, step),
            calories_burned: accumulate_calories(current_calories, increment),
            form_signal,
        };
        trace!(?sample, "Synthetic telemetry sample");
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::heart_rate::{MAX_BPM, MIN_BPM};

    fn run(source: &mut impl TelemetrySource, ticks: u64) -> Vec<TelemetrySample> {
        let mut samples: Vec<TelemetrySample> = Vec::new();
        for tick in 0..ticks {
            let sample = source.next(samples.last(), Duration::from_secs(tick * 2));
            samples.push(sample);
        }
        samples
    }

    #[test]
    fn test_heart_rate_stays_in_bounds() {
        for seed in 0..20 {
            let samples = run(&mut SyntheticTelemetry::seeded(seed), 2_000);
            assert!(samples
                .iter()
                .all(|s| (MIN_BPM..=MAX_BPM).contains(&s.heart_rate)));
        }
    }

    #[test]
    fn test_calories_are_monotonic_with_bounded_increments() {
        let samples = run(&mut SyntheticTelemetry::seeded(7), 1_000);
        let mut previous = 0.0;
        for sample in &samples {
            let increment = sample.calories_burned - previous;
            assert!(increment >= 0.10 - 1e-9, "increment {increment} too small");
            assert!(increment <= 0.30 + 1e-9, "increment {increment} too large");
            previous = sample.calories_burned;
        }
    }

    #[test]
    fn test_first_sample_steps_from_start_heart_rate() {
        let first = SyntheticTelemetry::seeded(1).next(None, Duration::ZERO);
        let start = i32::from(heart_rate::START_BPM);
        let hr = i32::from(first.heart_rate);
        assert!((start + heart_rate::STEP_MIN..=start + heart_rate::STEP_MAX).contains(&hr));
        assert_eq!(first.elapsed_seconds, 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = run(&mut SyntheticTelemetry::seeded(42), 50);
        let b = run(&mut SyntheticTelemetry::seeded(42), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_signal_is_drawn() {
        let samples = run(&mut SyntheticTelemetry::seeded(3), 300);
        for signal in FormSignal::ALL {
            assert!(samples.iter().any(|s| s.form_signal == signal));
        }
    }
}

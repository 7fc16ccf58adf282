// ABOUTME: Elapsed-time sources for the session tick loop
// ABOUTME: Wall clock for real sessions and a stepped clock for deterministic runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::{Duration, Instant};

/// Time since the session started
pub trait SessionClock: Send + Sync {
    /// Capture the start instant; called once when the session begins
    fn start(&mut self);

    /// Time elapsed since [`SessionClock::start`], read once per tick
    fn elapsed(&mut self) -> Duration;
}

impl<C: SessionClock + ?Sized> SessionClock for Box<C> {
    fn start(&mut self) {
        (**self).start();
    }

    fn elapsed(&mut self) -> Duration {
        (**self).elapsed()
    }
}

/// Monotonic wall clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Clock started now (restarted by the session on entry)
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl SessionClock for SystemClock {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed(&mut self) -> Duration {
        self.started.elapsed()
    }
}

/// Reads 0, `step`, 2×`step`, ... on successive calls
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    step: Duration,
    readings: u32,
}

impl SteppedClock {
    /// Clock that advances `step` per reading
    #[must_use]
    pub const fn new(step: Duration) -> Self {
        Self { step, readings: 0 }
    }
}

impl SessionClock for SteppedClock {
    fn start(&mut self) {
        self.readings = 0;
    }

    fn elapsed(&mut self) -> Duration {
        let elapsed = self.step.saturating_mul(self.readings);
        self.readings = self.readings.saturating_add(1);
        elapsed
    }
}

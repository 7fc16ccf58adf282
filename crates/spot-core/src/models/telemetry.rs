// ABOUTME: Live telemetry sample emitted once per session tick
// ABOUTME: Carries elapsed time, heart rate, cumulative calories, and the form-quality signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::workout::format_mm_ss;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-tick indicator of exercise-form quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormSignal {
    /// Good form
    Green,
    /// Borderline form
    Yellow,
    /// Poor form
    Red,
}

impl FormSignal {
    /// All signals, in the order the simulator draws from
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// Upper-case label used in the live display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for FormSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tick of live telemetry
///
/// Ephemeral: only the last sample of a session is folded into its
/// [`SessionLog`](super::SessionLog).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Whole seconds since the session started
    pub elapsed_seconds: u64,
    /// Heart rate in bpm, always within the configured bounds
    pub heart_rate: u16,
    /// Cumulative calories, never decreasing within a session
    pub calories_burned: f64,
    /// Form-quality signal for this tick
    pub form_signal: FormSignal,
}

impl TelemetrySample {
    /// Elapsed time as `MM:SS`
    #[must_use]
    pub fn elapsed_mm_ss(&self) -> String {
        format_mm_ss(self.elapsed_seconds)
    }

    /// Whole minutes and remaining seconds of the elapsed time
    #[must_use]
    pub const fn elapsed_parts(&self) -> (u64, u64) {
        (self.elapsed_seconds / 60, self.elapsed_seconds % 60)
    }
}

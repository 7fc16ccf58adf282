// ABOUTME: Progressive-overload trend analysis over a workout's session history
// ABOUTME: Computes weight change since the first session and a strength classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progressive-overload analysis
//!
//! With fewer than two sessions there is nothing to compare, so the analyzer
//! leaves any existing summary untouched instead of reporting an error.

use spot_core::models::{OverloadTrend, ProgressSummary, SessionLog, StrengthStatus, WorkoutRecord};
use tracing::debug;

/// Minimum number of sessions before a trend can be computed
pub const MIN_SESSIONS_FOR_TREND: usize = 2;

/// Computes [`ProgressSummary`] values from session history
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressAnalyzer;

impl ProgressAnalyzer {
    /// Create a new analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a chronological history
    ///
    /// Returns `None` when the history holds fewer than two sessions.
    #[must_use]
    pub fn analyze(&self, history: &[SessionLog]) -> Option<ProgressSummary> {
        if history.len() < MIN_SESSIONS_FOR_TREND {
            return None;
        }
        let first = history.first()?;
        let last = history.last()?;
        let prev = history.get(history.len() - 2)?;

        Some(ProgressSummary {
            overload_trend: Self::overload_trend(first, last),
            strength_status: Self::strength_status(prev, last),
        })
    }

    /// Recompute and store the summary on a workout record
    ///
    /// Overwrites any previous summary. With insufficient history this is a
    /// no-op and the previous summary (if any) is kept.
    pub fn apply(&self, record: &mut WorkoutRecord) -> Option<ProgressSummary> {
        let summary = self.analyze(&record.history);
        match summary {
            Some(summary) => {
                debug!(
                    overload_trend = %summary.overload_trend,
                    strength_status = %summary.strength_status,
                    sessions = record.history.len(),
                    "Progress summary updated"
                );
                record.progress = Some(summary);
            }
            None => debug!(
                sessions = record.history.len(),
                "Not enough sessions for a progress summary"
            ),
        }
        summary
    }

    fn overload_trend(first: &SessionLog, last: &SessionLog) -> OverloadTrend {
        if first.weight > 0.0 {
            OverloadTrend::Percent((last.weight - first.weight) / first.weight * 100.0)
        } else {
            OverloadTrend::NotAvailable
        }
    }

    // Weights are user-entered values, never computed, so exact comparison is intended
    #[allow(clippy::float_cmp)]
    fn strength_status(prev: &SessionLog, last: &SessionLog) -> StrengthStatus {
        if last.weight > prev.weight {
            StrengthStatus::Improving
        } else if last.weight == prev.weight && last.reps > prev.reps {
            StrengthStatus::HoldingSteady
        } else {
            StrengthStatus::NeedsPush
        }
    }
}

// ABOUTME: Workout record, session log, and progress summary models
// ABOUTME: Persisted per named exercise under a body part in the memory document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::phrases::DEFAULT_TIP;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format a number of seconds as zero-padded `MM:SS`
#[must_use]
pub fn format_mm_ss(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Stored profile of one named exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Muscle groups the exercise targets
    pub muscle_groups: String,
    /// Short explanation, spoken on the first session only
    pub description: String,
    /// Completed or re-entered sessions
    pub times_done: u32,
    /// Coaching tip offered on a form warning
    #[serde(default)]
    pub tip: String,
    /// Chronological, append-only session history
    #[serde(default)]
    pub history: Vec<SessionLog>,
    /// Derived from `history`; absent until two sessions exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressSummary>,
}

impl WorkoutRecord {
    /// Register a new workout described by the user
    ///
    /// An empty tip falls back to the default coaching tip.
    #[must_use]
    pub fn new(
        muscle_groups: impl Into<String>,
        description: impl Into<String>,
        tip: impl Into<String>,
    ) -> Self {
        let tip = tip.into();
        Self {
            muscle_groups: muscle_groups.into(),
            description: description.into(),
            times_done: 1,
            tip: if tip.trim().is_empty() {
                DEFAULT_TIP.to_owned()
            } else {
                tip
            },
            history: Vec::new(),
            progress: None,
        }
    }

    /// The stored tip, or the default tip when none was recorded
    #[must_use]
    pub fn tip_or_default(&self) -> &str {
        if self.tip.trim().is_empty() {
            DEFAULT_TIP
        } else {
            &self.tip
        }
    }

    /// Whether the description should be spoken on entry
    #[must_use]
    pub const fn is_first_session(&self) -> bool {
        self.times_done == 0
    }
}

/// One completed session's recorded metrics
///
/// Immutable once appended to a [`WorkoutRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Calendar date the session ended
    pub date: NaiveDate,
    /// Weight used (kg)
    pub weight: f64,
    /// Reps per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
    /// Session duration as `MM:SS`
    pub duration: String,
    /// Calories burned, rounded to 2 decimals
    pub calories_burned: f64,
}

/// Strength classification derived from the two most recent sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthStatus {
    /// Weight went up
    Improving,
    /// Same weight, more reps
    #[serde(rename = "Holding steady")]
    HoldingSteady,
    /// Anything else
    #[serde(rename = "Needs push")]
    NeedsPush,
}

impl StrengthStatus {
    /// Label used in the stored document and when spoken
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::HoldingSteady => "Holding steady",
            Self::NeedsPush => "Needs push",
        }
    }
}

impl fmt::Display for StrengthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight change between the first and latest session
///
/// Stored as a signed percentage string (`+12.50%`) or the literal `N/A`
/// when the first session used no weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OverloadTrend {
    /// Percentage change relative to the first session
    Percent(f64),
    /// Baseline weight was zero
    NotAvailable,
}

const NOT_AVAILABLE: &str = "N/A";

impl fmt::Display for OverloadTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(pct) => write!(f, "{pct:+.2}%"),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl From<OverloadTrend> for String {
    fn from(trend: OverloadTrend) -> Self {
        trend.to_string()
    }
}

impl TryFrom<String> for OverloadTrend {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed == NOT_AVAILABLE {
            return Ok(Self::NotAvailable);
        }
        trimmed
            .strip_suffix('%')
            .and_then(|number| number.parse::<f64>().ok())
            .map(Self::Percent)
            .ok_or_else(|| AppError::serialization(format!("Invalid overload trend: {value}")))
    }
}

/// Derived trend and strength status for one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Weight change since the first session
    pub overload_trend: OverloadTrend,
    /// Classification of the latest session against the previous one
    pub strength_status: StrengthStatus,
}

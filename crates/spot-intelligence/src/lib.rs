// ABOUTME: Coaching intelligence engine for the Spot workout coach
// ABOUTME: Exposes the progressive-overload analyzer and the form streak tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Spot Intelligence
//!
//! Derived computations over workout data:
//!
//! - [`ProgressAnalyzer`] turns a workout's session history into an overload
//!   trend and strength classification.
//! - [`StreakTracker`] watches the live form signal and raises coaching events
//!   when the same colour repeats.

/// Progressive-overload trend and strength classification
pub mod progress_analyzer;

/// Run-length tracking of live form signals
pub mod streak_tracker;

pub use progress_analyzer::ProgressAnalyzer;
pub use streak_tracker::{CoachingEvent, StreakTracker};

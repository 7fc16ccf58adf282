// ABOUTME: Core data models for the Spot workout coach
// ABOUTME: Body parts, workout records, session logs, the memory document, and telemetry samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Strongly-typed replacements for the loosely-shaped memory document:
//! a [`MemoryDocument`] maps every [`BodyPart`] to its named [`WorkoutRecord`]s,
//! each of which carries an append-only [`SessionLog`] history and an optional
//! derived [`ProgressSummary`].

/// Training categories
pub mod body_part;
/// The persisted memory document
pub mod memory;
/// Live telemetry samples and form signals
pub mod telemetry;
/// Workout records, session logs, and progress summaries
pub mod workout;

pub use body_part::BodyPart;
pub use memory::{MemoryDocument, WorkoutMap};
pub use telemetry::{FormSignal, TelemetrySample};
pub use workout::{
    format_mm_ss, OverloadTrend, ProgressSummary, SessionLog, StrengthStatus, WorkoutRecord,
};

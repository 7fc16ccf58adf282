// ABOUTME: Core types and constants for the Spot voice-guided workout coach
// ABOUTME: Foundation crate with error handling, the memory document model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Spot Core
//!
//! Foundation crate providing shared types and constants for the Spot workout
//! coach. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Telemetry bounds, coaching thresholds, and environment variable names
//! - **models**: Body parts, workout records, session logs, and live telemetry samples

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MemoryDocument`, `WorkoutRecord`, `SessionLog`, `TelemetrySample`)
pub mod models;

// ABOUTME: Memory document persistence abstraction and its implementations
// ABOUTME: Defines the MemoryStore trait with JSON-file and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Memory Store
//!
//! The coach loads the whole [`MemoryDocument`] once, mutates it in memory,
//! and hands it back to [`MemoryStore::save`] after each registration or
//! completed session. Implementations must backfill missing body-part keys on
//! load and make `save` idempotent.

use crate::errors::AppResult;
use crate::models::MemoryDocument;
use async_trait::async_trait;

/// JSON file backend
pub mod json_file;
/// In-process backend for tests and demos
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// Load/save access to the persisted memory document
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Load the stored document, or the fresh template when none exists
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error when an existing document
    /// cannot be read
    async fn load(&self) -> AppResult<MemoryDocument>;

    /// Overwrite the stored document
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend rejects the write; the caller's
    /// in-memory document is untouched so the save can be retried
    async fn save(&self, document: &MemoryDocument) -> AppResult<()>;
}

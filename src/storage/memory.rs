// ABOUTME: In-process memory document backend for tests and demos
// ABOUTME: Keeps the document behind a lock and can simulate rejected writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MemoryStore;
use crate::errors::{AppError, AppResult};
use crate::models::MemoryDocument;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Memory store that never touches the filesystem
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RwLock<Option<MemoryDocument>>,
    failing_saves: AtomicU32,
    save_count: AtomicUsize,
}

impl InMemoryStore {
    /// Empty store; `load` returns the template until something is saved
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a document
    #[must_use]
    pub fn with_document(document: MemoryDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
            ..Self::default()
        }
    }

    /// Reject the next `count` saves with a storage error
    pub fn fail_next_saves(&self, count: u32) {
        self.failing_saves.store(count, Ordering::SeqCst);
    }

    /// Number of successful saves
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Copy of the last saved document
    pub async fn snapshot(&self) -> Option<MemoryDocument> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl MemoryStore for InMemoryStore {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn load(&self) -> AppResult<MemoryDocument> {
        let mut document = self
            .document
            .read()
            .await
            .clone()
            .unwrap_or_else(MemoryDocument::template);
        document.backfill();
        Ok(document)
    }

    async fn save(&self, document: &MemoryDocument) -> AppResult<()> {
        let rejected = self
            .failing_saves
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(AppError::storage("In-memory store rejected the write"));
        }

        *self.document.write().await = Some(document.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

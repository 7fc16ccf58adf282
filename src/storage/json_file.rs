// ABOUTME: JSON file backend for the memory document
// ABOUTME: Atomic write-then-rename saves and backfilling loads of the legacy layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MemoryStore;
use crate::errors::{AppError, AppResult};
use crate::models::MemoryDocument;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

/// Stores the memory document as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path` (created on first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl MemoryStore for JsonFileStore {
    fn name(&self) -> &'static str {
        "json-file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> AppResult<MemoryDocument> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No memory document yet, starting from template");
                return Ok(MemoryDocument::template());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Cannot read {}: {e}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        let mut document: MemoryDocument = serde_json::from_str(&raw)?;
        let added = document.backfill();
        if added > 0 {
            debug!(added, "Backfilled missing body-part keys");
        }
        Ok(document)
    }

    #[instrument(skip(self, document), fields(path = %self.path.display()))]
    async fn save(&self, document: &MemoryDocument) -> AppResult<()> {
        let json = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();

        fs::write(&temp, json).await.map_err(|e| {
            AppError::storage(format!("Cannot write {}: {e}", temp.display())).with_source(e)
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::storage(format!("Cannot replace {}: {e}", self.path.display()))
                .with_source(e)
        })?;

        debug!("Memory document saved");
        Ok(())
    }
}

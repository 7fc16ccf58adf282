// ABOUTME: The memory document persisted between coaching sessions
// ABOUTME: Maps body parts to named workouts with backfill of missing keys on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Memory Document
//!
//! The stored layout keeps body parts as top-level keys and a `"History"` key
//! holding one session list per body part:
//!
//! ```json
//! {
//!   "Arms": { "Bicep Curl": { "muscle_groups": "...", "times_done": 2, "...": "..." } },
//!   "Legs": {},
//!   "History": { "Arms": [], "Legs": [] }
//! }
//! ```
//!
//! Every body part key is present after [`MemoryDocument::backfill`], even
//! when its workout map is empty.

use super::body_part::BodyPart;
use super::workout::{SessionLog, WorkoutRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Workouts stored under one body part, keyed by their case-preserved name
pub type WorkoutMap = BTreeMap<String, WorkoutRecord>;

/// Body part → workout name → workout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(flatten)]
    workouts: BTreeMap<BodyPart, WorkoutMap>,
    /// Per-body-part session lists kept for document compatibility
    #[serde(rename = "History", default)]
    history: BTreeMap<BodyPart, Vec<SessionLog>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::template()
    }
}

impl MemoryDocument {
    /// Fresh document with every body part present and empty
    #[must_use]
    pub fn template() -> Self {
        Self {
            workouts: BodyPart::ALL
                .into_iter()
                .map(|part| (part, WorkoutMap::new()))
                .collect(),
            history: BodyPart::ALL
                .into_iter()
                .map(|part| (part, Vec::new()))
                .collect(),
        }
    }

    /// Insert any missing body-part keys, in both the workout maps and the
    /// history lists. Returns the number of keys added.
    pub fn backfill(&mut self) -> usize {
        let mut added = 0;
        for part in BodyPart::ALL {
            if !self.workouts.contains_key(&part) {
                self.workouts.insert(part, WorkoutMap::new());
                added += 1;
            }
            if !self.history.contains_key(&part) {
                self.history.insert(part, Vec::new());
                added += 1;
            }
        }
        added
    }

    /// Body parts in menu order
    pub fn body_parts(&self) -> impl Iterator<Item = BodyPart> + '_ {
        self.workouts.keys().copied()
    }

    /// Workouts registered under a body part
    #[must_use]
    pub fn workouts(&self, part: BodyPart) -> Option<&WorkoutMap> {
        self.workouts.get(&part)
    }

    /// Per-body-part session list
    #[must_use]
    pub fn part_history(&self, part: BodyPart) -> &[SessionLog] {
        self.history.get(&part).map_or(&[], Vec::as_slice)
    }

    /// Resolve a user-supplied workout name to its stored key
    ///
    /// Names are case-preserving but matched case-insensitively after trimming.
    #[must_use]
    pub fn find_workout_key(&self, part: BodyPart, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.workouts.get(&part).and_then(|map| {
            map.keys()
                .find(|key| key.trim().to_lowercase() == wanted)
                .map(String::as_str)
        })
    }

    /// Look up a workout by its exact stored key
    #[must_use]
    pub fn workout(&self, part: BodyPart, key: &str) -> Option<&WorkoutRecord> {
        self.workouts.get(&part).and_then(|map| map.get(key))
    }

    /// Mutable access to a workout by its exact stored key
    pub fn workout_mut(&mut self, part: BodyPart, key: &str) -> Option<&mut WorkoutRecord> {
        self.workouts.get_mut(&part).and_then(|map| map.get_mut(key))
    }

    /// Register or replace a workout under a body part
    pub fn insert_workout(&mut self, part: BodyPart, name: impl Into<String>, record: WorkoutRecord) {
        self.workouts
            .entry(part)
            .or_default()
            .insert(name.into(), record);
    }
}

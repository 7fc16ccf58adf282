// ABOUTME: Body part enumeration used as the top-level key of the memory document
// ABOUTME: Provides the fixed ordered set of training categories and case-insensitive parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Training category a workout belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    /// Biceps, triceps, forearms
    Arms,
    /// Quads, hamstrings, calves
    Legs,
    /// Pectorals
    Chest,
    /// Lats, traps, lower back
    Back,
    /// Abs and obliques
    Core,
    /// Conditioning work
    Cardio,
}

impl BodyPart {
    /// Every body part, in menu order
    pub const ALL: [Self; 6] = [
        Self::Arms,
        Self::Legs,
        Self::Chest,
        Self::Back,
        Self::Core,
        Self::Cardio,
    ];

    /// Display name, also used as the document key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arms => "Arms",
            Self::Legs => "Legs",
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Core => "Core",
            Self::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|part| part.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown body part: {wanted}")))
    }
}

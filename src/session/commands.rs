// ABOUTME: Typed interpretation of lines typed during a running workout session
// ABOUTME: Recognizes the end-of-session phrase and tip requests; everything else is inert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::session::{END_COMMAND, TIP_COMMANDS};

/// A command line received while the session is running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// End the workout and move to the summary
    EndWorkout,
    /// Speak the workout's tip now
    Tip,
    /// Anything else; ignored by the session
    Other(String),
}

impl SessionCommand {
    /// Interpret one line (trimmed, case-insensitive)
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();
        if normalized == END_COMMAND {
            Self::EndWorkout
        } else if TIP_COMMANDS.contains(&normalized.as_str()) {
            Self::Tip
        } else {
            Self::Other(line.trim().to_owned())
        }
    }

    /// Whether `line` is the end-of-session phrase
    #[must_use]
    pub fn is_end(line: &str) -> bool {
        matches!(Self::parse(line), Self::EndWorkout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_phrase_is_trimmed_and_case_insensitive() {
        assert_eq!(SessionCommand::parse("end workout"), SessionCommand::EndWorkout);
        assert_eq!(SessionCommand::parse("  End Workout \n"), SessionCommand::EndWorkout);
        assert!(SessionCommand::is_end("END WORKOUT"));
    }

    #[test]
    fn test_near_misses_are_inert() {
        assert_eq!(
            SessionCommand::parse("end workout now"),
            SessionCommand::Other("end workout now".into())
        );
        assert_eq!(SessionCommand::parse("end"), SessionCommand::Other("end".into()));
    }

    #[test]
    fn test_tip_requests() {
        assert_eq!(SessionCommand::parse("tip"), SessionCommand::Tip);
        assert_eq!(SessionCommand::parse("Need a tip"), SessionCommand::Tip);
    }
}

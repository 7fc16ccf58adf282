// ABOUTME: Run-length tracking of live form signals during a workout session
// ABOUTME: Raises form warnings after repeated RED samples and encouragement after repeated GREEN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form streak detection
//!
//! The RED and GREEN counters are mutually exclusive: a sample of one colour
//! resets the other, and YELLOW resets both. When a counter reaches the
//! threshold an event is raised and that counter starts over, so a run of six
//! RED samples produces two warnings.

use spot_core::constants::session::STREAK_THRESHOLD;
use spot_core::models::FormSignal;
use tracing::debug;

/// Coaching interjection raised by a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachingEvent {
    /// Consecutive RED samples; the user is offered a tip
    FormWarning,
    /// Consecutive GREEN samples; the user is praised
    Encouragement,
}

/// Consecutive-signal counters for one session
#[derive(Debug, Clone)]
pub struct StreakTracker {
    red_streak: u32,
    green_streak: u32,
    threshold: u32,
}

impl Default for StreakTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StreakTracker {
    /// Tracker with the standard threshold of three samples
    #[must_use]
    pub const fn new() -> Self {
        Self::with_threshold(STREAK_THRESHOLD)
    }

    /// Tracker with a custom threshold (clamped to at least one sample)
    #[must_use]
    pub const fn with_threshold(threshold: u32) -> Self {
        Self {
            red_streak: 0,
            green_streak: 0,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Feed one sample, returning the event it triggers, if any
    pub fn observe(&mut self, signal: FormSignal) -> Option<CoachingEvent> {
        let event = match signal {
            FormSignal::Red => {
                self.green_streak = 0;
                self.red_streak += 1;
                (self.red_streak >= self.threshold).then(|| {
                    // Resets whether or not the user later accepts the tip
                    self.red_streak = 0;
                    CoachingEvent::FormWarning
                })
            }
            FormSignal::Green => {
                self.red_streak = 0;
                self.green_streak += 1;
                (self.green_streak >= self.threshold).then(|| {
                    self.green_streak = 0;
                    CoachingEvent::Encouragement
                })
            }
            FormSignal::Yellow => {
                self.reset();
                None
            }
        };

        if let Some(event) = event {
            debug!(?event, %signal, "Form streak threshold reached");
        }
        event
    }

    /// Current consecutive RED count
    #[must_use]
    pub const fn red_streak(&self) -> u32 {
        self.red_streak
    }

    /// Current consecutive GREEN count
    #[must_use]
    pub const fn green_streak(&self) -> u32 {
        self.green_streak
    }

    /// Clear both counters
    pub fn reset(&mut self) {
        self.red_streak = 0;
        self.green_streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FormSignal::{Green, Red, Yellow};

    fn events(signals: &[FormSignal]) -> (Vec<CoachingEvent>, StreakTracker) {
        let mut tracker = StreakTracker::new();
        let events = signals.iter().filter_map(|&s| tracker.observe(s)).collect();
        (events, tracker)
    }

    #[test]
    fn test_three_reds_fire_one_warning_and_reset() {
        let (fired, tracker) = events(&[Red, Red, Red]);
        assert_eq!(fired, vec![CoachingEvent::FormWarning]);
        assert_eq!(tracker.red_streak(), 0);
        assert_eq!(tracker.green_streak(), 0);
    }

    #[test]
    fn test_yellow_breaks_red_run() {
        let (fired, tracker) = events(&[Red, Yellow, Red, Red]);
        assert!(fired.is_empty());
        assert_eq!(tracker.red_streak(), 2);
    }

    #[test]
    fn test_green_resets_red_and_vice_versa() {
        let (fired, tracker) = events(&[Red, Red, Green, Red, Red]);
        assert!(fired.is_empty());
        assert_eq!(tracker.red_streak(), 2);
        assert_eq!(tracker.green_streak(), 0);

        let (fired, tracker) = events(&[Green, Green, Red, Green]);
        assert!(fired.is_empty());
        assert_eq!(tracker.green_streak(), 1);
        assert_eq!(tracker.red_streak(), 0);
    }

    #[test]
    fn test_three_greens_fire_encouragement() {
        let (fired, tracker) = events(&[Green, Green, Green, Green]);
        assert_eq!(fired, vec![CoachingEvent::Encouragement]);
        assert_eq!(tracker.green_streak(), 1);
    }

    #[test]
    fn test_long_red_run_warns_every_third_sample() {
        let (fired, _) = events(&[Red; 7]);
        assert_eq!(fired, vec![CoachingEvent::FormWarning; 2]);
    }

    #[test]
    fn test_counters_never_both_nonzero() {
        let mut tracker = StreakTracker::new();
        for signal in [Red, Green, Green, Red, Yellow, Green, Red, Red, Green] {
            tracker.observe(signal);
            assert!(tracker.red_streak() == 0 || tracker.green_streak() == 0);
        }
    }
}

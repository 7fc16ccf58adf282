// ABOUTME: Spoken and printed output capabilities for the coach
// ABOUTME: Announcer trait with console, external text-to-speech, and recording implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Announcer
//!
//! Everything the coach says goes through an [`Announcer`]. `speak` is
//! synchronous and best-effort: it prints the line, may voice it, and never
//! reports failure to the caller. `show` only prints.

use crate::config::VoiceConfig;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Prefix printed before every spoken line
pub const SPEAKER_PREFIX: &str = "[Spot]";

/// Text output capability with an explicit lifecycle
pub trait Announcer: Send + Sync {
    /// Prepare the output device
    fn open(&self) {}

    /// Say a line aloud (and print it)
    fn speak(&self, text: &str);

    /// Print without voicing
    fn show(&self, text: &str);

    /// Release the output device
    fn close(&self) {}
}

/// Plain stdout announcer
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn speak(&self, text: &str) {
        println!("{SPEAKER_PREFIX} {text}");
    }

    fn show(&self, text: &str) {
        println!("{text}");
    }
}

/// Prints every line and voices it through an external text-to-speech program
///
/// The configured command is split on whitespace; a `{rate}` argument is
/// replaced by the configured words-per-minute and the text is appended as the
/// final argument (e.g. `espeak -s {rate}`).
#[derive(Debug, Clone)]
pub struct VoiceAnnouncer {
    program: String,
    args: Vec<String>,
}

impl VoiceAnnouncer {
    /// Build from configuration; `None` when no voice program is configured
    #[must_use]
    pub fn from_config(config: &VoiceConfig) -> Option<Self> {
        let mut parts = config.command.as_deref()?.split_whitespace();
        let program = parts.next()?.to_owned();
        let rate = config.rate.to_string();
        let args = parts.map(|arg| arg.replace("{rate}", &rate)).collect();
        Some(Self { program, args })
    }

    /// Name of the voice program
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn voice(&self, text: &str) {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => warn!(program = %self.program, %status, "Voice program failed"),
            Err(e) => warn!(program = %self.program, error = %e, "Voice program unavailable"),
        }
    }
}

impl Announcer for VoiceAnnouncer {
    fn open(&self) {
        debug!(program = %self.program, args = ?self.args, "Voice output enabled");
    }

    fn speak(&self, text: &str) {
        println!("{SPEAKER_PREFIX} {text}");
        self.voice(text);
    }

    fn show(&self, text: &str) {
        println!("{text}");
    }
}

/// One captured line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// Passed to `speak`
    Spoken(String),
    /// Passed to `show`
    Shown(String),
}

/// Captures output instead of printing it; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    lines: Arc<Mutex<Vec<Utterance>>>,
}

impl RecordingAnnouncer {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything captured so far
    #[must_use]
    pub fn utterances(&self) -> Vec<Utterance> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the spoken lines
    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.utterances()
            .into_iter()
            .filter_map(|line| match line {
                Utterance::Spoken(text) => Some(text),
                Utterance::Shown(_) => None,
            })
            .collect()
    }

    /// Whether any spoken line contains `needle`
    #[must_use]
    pub fn said(&self, needle: &str) -> bool {
        self.spoken().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: Utterance) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

impl Announcer for RecordingAnnouncer {
    fn speak(&self, text: &str) {
        self.push(Utterance::Spoken(text.to_owned()));
    }

    fn show(&self, text: &str) {
        self.push(Utterance::Shown(text.to_owned()));
    }
}

/// Announcer selected by configuration: voice when a program is set, console otherwise
#[must_use]
pub fn announcer_from_config(config: &VoiceConfig) -> Arc<dyn Announcer> {
    VoiceAnnouncer::from_config(config).map_or_else(
        || Arc::new(ConsoleAnnouncer) as Arc<dyn Announcer>,
        |voice| Arc::new(voice) as Arc<dyn Announcer>,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_command_parsing_substitutes_rate() {
        let config = VoiceConfig {
            command: Some("espeak -s {rate}".into()),
            rate: 140,
        };
        let voice = VoiceAnnouncer::from_config(&config).unwrap();
        assert_eq!(voice.program(), "espeak");
        assert_eq!(voice.args, vec!["-s".to_owned(), "140".to_owned()]);
    }

    #[test]
    fn test_blank_voice_command_means_text_only() {
        let config = VoiceConfig {
            command: Some("   ".into()),
            rate: 160,
        };
        assert!(VoiceAnnouncer::from_config(&config).is_none());
        assert!(VoiceAnnouncer::from_config(&VoiceConfig::default()).is_none());
    }

    #[test]
    fn test_recording_announcer_shares_log_between_clones() {
        let recorder = RecordingAnnouncer::new();
        let handle = recorder.clone();
        recorder.speak("Activated and ready!");
        recorder.show("1. Arms");

        assert_eq!(
            handle.utterances(),
            vec![
                Utterance::Spoken("Activated and ready!".into()),
                Utterance::Shown("1. Arms".into()),
            ]
        );
        assert!(handle.said("ready"));
        assert_eq!(handle.spoken().len(), 1);
    }
}

// ABOUTME: Synchronous user prompts for the interactive coach flow
// ABOUTME: Prompter trait with stdin and scripted implementations plus yes/no and menu helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! A prompt waits for exactly one answer line. Prompts pause whatever the
//! caller is doing; they are only used outside the running session tick loop
//! (body-part selection, workout registration, and end-of-session data).

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Asks a question and returns one trimmed answer
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Show `question` and wait for the answer
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::InputClosed`](crate::errors::ErrorCode::InputClosed)
    /// when the input ends before an answer arrives
    async fn ask(&self, question: &str) -> AppResult<String>;
}

/// Reads answers from stdin on a blocking worker thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompter;

#[async_trait]
impl Prompter for ConsolePrompter {
    async fn ask(&self, question: &str) -> AppResult<String> {
        let question = question.to_owned();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<Option<String>> {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{question}")?;
            stdout.flush()?;
            drop(stdout);

            let mut line = String::new();
            let read = io::stdin().lock().read_line(&mut line)?;
            Ok((read > 0).then(|| line.trim().to_owned()))
        })
        .await
        .map_err(|e| AppError::internal(format!("Prompt worker failed: {e}")))?
        .map_err(|e| AppError::input_closed(format!("Cannot read answer: {e}")).with_source(e))?;

        answer.ok_or_else(|| AppError::input_closed("Input ended while waiting for an answer"))
    }
}

/// Answers from a fixed queue and records every question asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// Prompter that will give `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&self, question: &str) -> AppResult<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(question.to_owned());
        let answer = self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        answer
            .map(|a| a.trim().to_owned())
            .ok_or_else(|| AppError::input_closed("Scripted answers exhausted"))
    }
}

/// Whether an answer means yes
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Ask a yes/no question; anything but "yes"/"y" counts as no
///
/// # Errors
///
/// Propagates prompter failures
pub async fn ask_yes_no(prompter: &dyn Prompter, question: &str) -> AppResult<bool> {
    let answer = prompter.ask(&format!("{question} (yes/no): ")).await?;
    Ok(is_affirmative(&answer))
}

/// Ask for a 1-based menu choice, re-asking until the answer is in range
///
/// Returns the 0-based index into `options`.
///
/// # Errors
///
/// Returns an invalid-input error when `options` is empty, and propagates
/// prompter failures
pub async fn ask_choice<T: std::fmt::Display + Sync>(
    prompter: &dyn Prompter,
    question: &str,
    options: &[T],
) -> AppResult<usize> {
    if options.is_empty() {
        return Err(AppError::invalid_input("No options to choose from"));
    }

    let menu = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {option}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    let mut prompt = format!("{question}\n{menu}\nEnter choice number: ");

    loop {
        let answer = prompter.ask(&prompt).await?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => {
                debug!(%answer, "Menu answer out of range, asking again");
                prompt = format!("Please enter a number from 1 to {}: ", options.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_prompter_trims_and_exhausts() {
        let prompter = ScriptedPrompter::new(["  60 ", "10"]);
        assert_eq!(prompter.ask("Weight used (kg): ").await.unwrap(), "60");
        assert_eq!(prompter.ask("Reps per set: ").await.unwrap(), "10");

        let err = prompter.ask("Number of sets: ").await.unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InputClosed);
        assert_eq!(prompter.questions().len(), 3);
    }

    #[tokio::test]
    async fn test_ask_choice_reprompts_until_valid() {
        let prompter = ScriptedPrompter::new(["zero", "9", "0", "2"]);
        let index = ask_choice(&prompter, "Pick one", &["Arms", "Legs"])
            .await
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(prompter.questions().len(), 4);
        assert!(prompter.questions()[0].contains("2. Legs"));
    }

    #[tokio::test]
    async fn test_yes_no_is_lenient_about_case() {
        let prompter = ScriptedPrompter::new(["YES", "nope", "y"]);
        assert!(ask_yes_no(&prompter, "Chat?").await.unwrap());
        assert!(!ask_yes_no(&prompter, "Chat?").await.unwrap());
        assert!(ask_yes_no(&prompter, "Chat?").await.unwrap());
    }
}

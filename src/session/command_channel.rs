// ABOUTME: Non-blocking inbox of user command lines fed by a background reader thread
// ABOUTME: The session loop drains it once per tick; the reader stops after the end phrase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Command Channel
//!
//! A detached reader thread blocks on line input and forwards each trimmed line
//! into an unbounded queue. The thread is never joined, so process exit does
//! not wait on a pending read. Lines are delivered in arrival order and stay
//! queued until drained.

use super::commands::SessionCommand;
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

/// Name of the background reader thread
pub const LISTENER_THREAD_NAME: &str = "spot-command-listener";

/// Feeding side of a [`CommandChannel`]
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<String>,
}

impl CommandSender {
    /// Enqueue one line; returns `false` once the channel is gone
    pub fn send(&self, line: impl Into<String>) -> bool {
        self.tx.send(line.into()).is_ok()
    }
}

/// Receiving side polled by the session loop
#[derive(Debug)]
pub struct CommandChannel {
    rx: mpsc::UnboundedReceiver<String>,
    disconnected: bool,
}

impl CommandChannel {
    /// Channel fed manually through the returned sender
    #[must_use]
    pub fn new() -> (CommandSender, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            CommandSender { tx },
            Self {
                rx,
                disconnected: false,
            },
        )
    }

    /// Channel fed by a reader thread over `reader`
    #[must_use]
    pub fn spawn_listener<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self::spawn_listener_with(move || reader)
    }

    /// Channel fed by a reader thread over process stdin
    ///
    /// The stdin lock is taken inside the reader thread and released when it
    /// stops, so later prompts see every line typed after the end phrase.
    #[must_use]
    pub fn stdin() -> Self {
        Self::spawn_listener_with(|| io::stdin().lock())
    }

    fn spawn_listener_with<F, R>(open: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: BufRead,
    {
        let (sender, channel) = Self::new();
        let spawned = thread::Builder::new()
            .name(LISTENER_THREAD_NAME.into())
            .spawn(move || listen(open(), &sender));
        if let Err(e) = spawned {
            // Sender was moved into the failed closure and dropped, so the
            // channel reports itself closed on the first drain.
            warn!(error = %e, "Cannot start command listener");
        }
        channel
    }

    /// Take every queued line without blocking, oldest first
    pub fn drain(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(line) => lines.push(line),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
        lines
    }

    /// Wait for the next line; `None` once every sender is gone and the queue is empty
    pub async fn next_line(&mut self) -> Option<String> {
        let line = self.rx.recv().await;
        if line.is_none() {
            self.disconnected = true;
        }
        line
    }

    /// Whether a drain has observed that no more lines can arrive
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.disconnected
    }
}

fn listen<R: BufRead>(reader: R, sender: &CommandSender) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line.trim().to_owned(),
            Err(e) => {
                warn!(error = %e, "Command input failed, listener stopping");
                return;
            }
        };
        let is_end = SessionCommand::is_end(&line);
        debug!(command = %line, "Command received");
        if !sender.send(line) || is_end {
            debug!("Command listener stopping");
            return;
        }
    }
    debug!("Command input ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_drain_is_fifo_and_empties_queue() {
        let (sender, mut channel) = CommandChannel::new();
        assert!(sender.send("first"));
        assert!(sender.send("second"));

        assert_eq!(channel.drain(), vec!["first", "second"]);
        assert!(channel.drain().is_empty());
        assert!(!channel.is_closed());
    }

    #[test]
    fn test_drop_of_sender_marks_channel_closed_after_remaining_lines() {
        let (sender, mut channel) = CommandChannel::new();
        sender.send("end workout");
        drop(sender);

        assert_eq!(channel.drain(), vec!["end workout"]);
        assert!(channel.is_closed());
    }

    #[tokio::test]
    async fn test_listener_stops_after_end_phrase() {
        let input = Cursor::new("  hello \nEND WORKOUT\nnever read\n");
        let mut channel = CommandChannel::spawn_listener(input);

        assert_eq!(channel.next_line().await.as_deref(), Some("hello"));
        assert_eq!(channel.next_line().await.as_deref(), Some("END WORKOUT"));
        let rest = tokio::time::timeout(Duration::from_secs(5), channel.next_line())
            .await
            .unwrap();
        assert_eq!(rest, None);
        assert!(channel.is_closed());
    }
}

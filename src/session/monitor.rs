// ABOUTME: Session monitor state machine driving one live workout from first tick to saved log
// ABOUTME: Runs telemetry ticks, streak coaching, command polling, summary, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Monitor
//!
//! States: `Running` → `Ending` → `Done`. There is no way back to `Running`,
//! and [`SessionMonitor::run`] consumes the monitor, so every session starts
//! with a fresh telemetry source, streak tracker, and command inbox.
//!
//! While running, each tick reads the clock, advances telemetry, renders the
//! sample, feeds the [`StreakTracker`], then drains the [`CommandChannel`].
//! A form warning pauses the tick cadence until the yes/no answer arrives
//! on the command channel. After the end phrase is drained, the last sample
//! is frozen, set data is prompted for, and the new [`SessionLog`] plus the
//! recomputed progress summary are written with one save.

use super::clock::{SessionClock, SystemClock};
use super::command_channel::CommandChannel;
use super::commands::SessionCommand;
use super::display;
use super::SessionResources;
use crate::console::is_affirmative;
use crate::constants::{phrases, session};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{CoachingEvent, ProgressAnalyzer, StreakTracker};
use crate::models::{BodyPart, MemoryDocument, ProgressSummary, SessionLog, TelemetrySample};
use crate::providers::TelemetrySource;
use chrono::{Local, NaiveDate};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Result of a completed session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    /// Identifier used in logs for this session
    pub session_id: Uuid,
    /// Number of telemetry ticks rendered
    pub ticks: u64,
    /// Log appended to the workout's history
    pub log: SessionLog,
    /// Progress summary stored on the workout after this session
    pub progress: Option<ProgressSummary>,
}

enum SessionState {
    Running,
    Ending(TelemetrySample),
    Done(SessionOutcome),
}

/// Per-session running state
struct RunningSession {
    streaks: StreakTracker,
    last_sample: Option<TelemetrySample>,
    ticks: u64,
    end_requested: bool,
    tip: String,
    /// Lines typed before a tip offer, handled at the next drain
    pending: Vec<String>,
}

/// Drives one workout session
pub struct SessionMonitor {
    resources: SessionResources,
    telemetry: Box<dyn TelemetrySource>,
    commands: CommandChannel,
    clock: Box<dyn SessionClock>,
    tick_interval: Duration,
    analyzer: ProgressAnalyzer,
    session_id: Uuid,
    today: Option<NaiveDate>,
}

impl SessionMonitor {
    /// Monitor using the wall clock and the standard two-second tick
    pub fn new(
        resources: SessionResources,
        telemetry: Box<dyn TelemetrySource>,
        commands: CommandChannel,
    ) -> Self {
        Self {
            resources,
            telemetry,
            commands,
            clock: Box::new(SystemClock::new()),
            tick_interval: Duration::from_millis(session::DEFAULT_TICK_INTERVAL_MS),
            analyzer: ProgressAnalyzer::new(),
            session_id: Uuid::new_v4(),
            today: None,
        }
    }

    /// Replace the elapsed-time source
    #[must_use]
    pub fn with_clock(mut self, clock: impl SessionClock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the wall-clock pause between ticks
    #[must_use]
    pub const fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Fix the date stamped on the session log (defaults to today, local time)
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Identifier of this session
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Run the session for `workout_key` under `part` until it is done
    ///
    /// `workout_key` must be the exact stored key (see
    /// [`MemoryDocument::find_workout_key`]).
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the workout is not in the document
    /// - `InvalidSessionData` when weight, reps, or sets do not parse; nothing is appended
    /// - `InputClosed` when input ends before the session completes
    /// - `StorageError` when the save fails; the appended log stays in `document`
    ///
    /// Every error is announced before it is returned.
    #[instrument(
        skip(self, document),
        fields(session_id = %self.session_id, body_part = %part, workout = %workout_key)
    )]
    pub async fn run(
        mut self,
        part: BodyPart,
        workout_key: &str,
        document: &mut MemoryDocument,
    ) -> AppResult<SessionOutcome> {
        let result = self.drive(part, workout_key, document).await;
        match &result {
            Ok(outcome) => info!(
                ticks = outcome.ticks,
                duration = %outcome.log.duration,
                "Session complete"
            ),
            Err(e) => {
                error!(code = ?e.code, error = %e, "Session stopped");
                self.resources
                    .announcer
                    .speak(&format!("Session stopped: {}", e.message));
            }
        }
        result
    }

    async fn drive(
        &mut self,
        part: BodyPart,
        workout_key: &str,
        document: &mut MemoryDocument,
    ) -> AppResult<SessionOutcome> {
        let record = document
            .workout(part, workout_key)
            .ok_or_else(|| AppError::not_found(format!("Workout {workout_key} under {part}")))?;

        let mut running = RunningSession {
            streaks: StreakTracker::new(),
            last_sample: None,
            ticks: 0,
            end_requested: false,
            tip: record.tip_or_default().to_owned(),
            pending: Vec::new(),
        };

        info!(telemetry = self.telemetry.name(), "Session started");
        self.resources.announcer.speak(phrases::MONITOR_START);
        self.clock.start();

        let mut state = SessionState::Running;
        loop {
            state = match state {
                SessionState::Running => self.tick(&mut running).await?,
                SessionState::Ending(sample) => {
                    let outcome = self
                        .finish(part, workout_key, document, &sample, running.ticks)
                        .await?;
                    SessionState::Done(outcome)
                }
                SessionState::Done(outcome) => return Ok(outcome),
            };
        }
    }

    /// One `Running` iteration; returns the next state
    async fn tick(&mut self, running: &mut RunningSession) -> AppResult<SessionState> {
        let elapsed = self.clock.elapsed();
        let sample = self.telemetry.next(running.last_sample.as_ref(), elapsed);
        running.last_sample = Some(sample);
        running.ticks += 1;
        self.resources.announcer.show(&display::render_sample(&sample));

        if let Some(event) = running.streaks.observe(sample.form_signal) {
            self.coach(event, running).await?;
        }

        let lines: Vec<String> = running
            .pending
            .drain(..)
            .chain(self.commands.drain())
            .collect();
        for line in lines {
            match SessionCommand::parse(&line) {
                SessionCommand::EndWorkout => {
                    running.end_requested = true;
                    break;
                }
                SessionCommand::Tip => self.resources.announcer.speak(&running.tip),
                SessionCommand::Other(text) => debug!(command = %text, "Ignoring command"),
            }
        }

        if running.end_requested {
            info!(ticks = running.ticks, "End of workout requested");
            return Ok(SessionState::Ending(sample));
        }
        if self.commands.is_closed() {
            return Err(AppError::input_closed(
                "Command input closed before the workout ended",
            ));
        }

        tokio::time::sleep(self.tick_interval).await;
        Ok(SessionState::Running)
    }

    async fn coach(&mut self, event: CoachingEvent, running: &mut RunningSession) -> AppResult<()> {
        let announcer = &self.resources.announcer;
        match event {
            CoachingEvent::Encouragement => announcer.speak(phrases::ENCOURAGEMENT),
            CoachingEvent::FormWarning => {
                announcer.speak(phrases::FORM_WARNING);
                // Only a line typed after the offer answers it
                running.pending.extend(self.commands.drain());
                if running.pending.iter().any(|line| SessionCommand::is_end(line)) {
                    debug!("End already requested, skipping the tip offer");
                    return Ok(());
                }
                announcer.show(phrases::TIP_OFFER);
                let answer = self.commands.next_line().await.ok_or_else(|| {
                    AppError::input_closed("Input ended while waiting for the tip answer")
                })?;
                if SessionCommand::is_end(&answer) {
                    running.end_requested = true;
                } else if is_affirmative(&answer) {
                    announcer.speak(&running.tip);
                } else {
                    debug!(%answer, "Tip declined");
                }
            }
        }
        Ok(())
    }

    /// `Ending`: summarize, collect set data, append, analyze, and save
    async fn finish(
        &self,
        part: BodyPart,
        workout_key: &str,
        document: &mut MemoryDocument,
        sample: &TelemetrySample,
        ticks: u64,
    ) -> AppResult<SessionOutcome> {
        let announcer = &self.resources.announcer;
        announcer.speak(phrases::WORKOUT_ENDED);
        announcer.show(&display::render_summary(sample));
        announcer.speak(&display::spoken_summary(sample));

        let log = self.collect_log(sample).await?;

        let record = document
            .workout_mut(part, workout_key)
            .ok_or_else(|| AppError::not_found(format!("Workout {workout_key} under {part}")))?;
        record.history.push(log.clone());
        self.analyzer.apply(record);
        let progress = record.progress;
        let sessions = record.history.len();

        if let Err(e) = self.resources.store.save(document).await {
            warn!(error = %e, "Session log kept in memory but not saved");
            return Err(e);
        }
        info!(sessions, "Session log saved");

        announcer.show(&display::render_progress(progress.as_ref()));
        announcer.speak(&display::spoken_progress(progress.as_ref()));

        Ok(SessionOutcome {
            session_id: self.session_id,
            ticks,
            log,
            progress,
        })
    }

    /// Prompt for weight, reps, and sets; every answer must parse before anything is recorded
    async fn collect_log(&self, sample: &TelemetrySample) -> AppResult<SessionLog> {
        let prompter = &self.resources.prompter;
        let weight = parse_weight(&prompter.ask("Weight used (kg): ").await?)?;
        let reps = parse_count("reps", &prompter.ask("Reps per set: ").await?)?;
        let sets = parse_count("sets", &prompter.ask("Number of sets: ").await?)?;

        Ok(SessionLog {
            date: self.today.unwrap_or_else(|| Local::now().date_naive()),
            weight,
            reps,
            sets,
            duration: sample.elapsed_mm_ss(),
            calories_burned: (sample.calories_burned * 100.0).round() / 100.0,
        })
    }
}

fn parse_weight(raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
        .ok_or_else(|| {
            AppError::invalid_session_data(format!(
                "Invalid weight '{raw}': expected a non-negative number"
            ))
        })
}

fn parse_count(field: &str, raw: &str) -> AppResult<u32> {
    raw.trim().parse::<u32>().map_err(|e| {
        AppError::invalid_session_data(format!(
            "Invalid {field} '{raw}': expected a whole number"
        ))
        .with_source(e)
    })
}

// ABOUTME: Text rendering of live telemetry, the end-of-session summary, and progress updates
// ABOUTME: Produces both the printed blocks and the sentences spoken by the announcer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{ProgressSummary, TelemetrySample};

const RULE: &str = "--------------------------------------";

/// Printed block for one tick
#[must_use]
pub fn render_sample(sample: &TelemetrySample) -> String {
    format!(
        "{RULE}\nTime: {}\nHeart Rate: {} bpm\nCalories Burned: {:.2}\nFeedback: {}\n{RULE}",
        sample.elapsed_mm_ss(),
        sample.heart_rate,
        sample.calories_burned,
        sample.form_signal,
    )
}

/// Printed workout summary from the frozen last sample
#[must_use]
pub fn render_summary(sample: &TelemetrySample) -> String {
    format!(
        "Workout Summary:\nTotal Time: {}\nFinal Heart Rate: {} bpm\nCalories Burned: {:.2}",
        sample.elapsed_mm_ss(),
        sample.heart_rate,
        sample.calories_burned,
    )
}

/// Spoken workout summary; calories are rounded to whole numbers
#[must_use]
pub fn spoken_summary(sample: &TelemetrySample) -> String {
    let (minutes, seconds) = sample.elapsed_parts();
    format!(
        "Your total time was {minutes} minutes and {seconds} seconds. \
         Final heart rate was {} beats per minute, and you burned {:.0} calories.",
        sample.heart_rate, sample.calories_burned,
    )
}

fn progress_fields(progress: Option<&ProgressSummary>) -> (String, String) {
    progress.map_or_else(
        || ("N/A".to_owned(), "Unknown".to_owned()),
        |p| (p.overload_trend.to_string(), p.strength_status.to_string()),
    )
}

/// Printed progress update
#[must_use]
pub fn render_progress(progress: Option<&ProgressSummary>) -> String {
    let (overload, strength) = progress_fields(progress);
    format!("Progress Update:\nProgressive Overload Trend: {overload}\nStrength Status: {strength}")
}

/// Spoken progress update
#[must_use]
pub fn spoken_progress(progress: Option<&ProgressSummary>) -> String {
    let (overload, strength) = progress_fields(progress);
    format!("Progress update. Your overload trend is {overload}. Strength status: {strength}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormSignal, OverloadTrend, StrengthStatus};

    fn sample() -> TelemetrySample {
        TelemetrySample {
            elapsed_seconds: 125,
            heart_rate: 104,
            calories_burned: 12.456,
            form_signal: FormSignal::Red,
        }
    }

    #[test]
    fn test_sample_block() {
        let block = render_sample(&sample());
        assert!(block.contains("Time: 02:05"));
        assert!(block.contains("Heart Rate: 104 bpm"));
        assert!(block.contains("Calories Burned: 12.46"));
        assert!(block.contains("Feedback: RED"));
    }

    #[test]
    fn test_spoken_summary() {
        assert_eq!(
            spoken_summary(&sample()),
            "Your total time was 2 minutes and 5 seconds. Final heart rate was 104 beats per minute, and you burned 12 calories."
        );
    }

    #[test]
    fn test_progress_defaults_when_missing() {
        assert_eq!(
            spoken_progress(None),
            "Progress update. Your overload trend is N/A. Strength status: Unknown."
        );

        let summary = ProgressSummary {
            overload_trend: OverloadTrend::Percent(12.5),
            strength_status: StrengthStatus::HoldingSteady,
        };
        let printed = render_progress(Some(&summary));
        assert!(printed.contains("Progressive Overload Trend: +12.50%"));
        assert!(printed.contains("Strength Status: Holding steady"));
    }
}

//! Reveal timeline for a submitted guess
//!
//! Describes when each tile of an evaluated row flips and when input can
//! resume. Front ends consume this on their own clock; the round tracker has
//! already moved on by the time the first tile turns.

use crate::core::{Feedback, LetterClass, Word};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reveal pacing, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// Delay between consecutive tiles starting to flip
    pub stagger_ms: u64,
    /// How long a single tile flip lasts
    pub flip_ms: u64,
    /// Pause after the last tile starts before input is accepted again
    pub settle_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger_ms: 260,
            flip_ms: 160,
            settle_ms: 350,
        }
    }
}

impl RevealTiming {
    /// No animation at all; every tile is revealed at once
    pub const INSTANT: Self = Self {
        stagger_ms: 0,
        flip_ms: 0,
        settle_ms: 0,
    };
}

/// One tile's flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub position: usize,
    pub letter: char,
    pub class: LetterClass,
    /// When the flip starts, relative to submission
    pub start: Duration,
    /// When the tile shows its color (and the keyboard key updates)
    pub shown: Duration,
}

/// Ordered reveal steps for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTimeline {
    steps: Vec<RevealStep>,
    settle_at: Duration,
}

impl RevealTimeline {
    #[must_use]
    pub fn for_guess(guess: &Word, feedback: &Feedback, timing: &RevealTiming) -> Self {
        let stagger = Duration::from_millis(timing.stagger_ms);
        let flip = Duration::from_millis(timing.flip_ms);

        let steps: Vec<RevealStep> = guess
            .chars()
            .iter()
            .zip(feedback.marks())
            .enumerate()
            .map(|(position, (&letter, &class))| {
                // Config timings are unbounded
                let start = stagger.saturating_mul(position as u32);
                RevealStep {
                    position,
                    letter: char::from(letter),
                    class,
                    start,
                    shown: start.saturating_add(flip),
                }
            })
            .collect();

        let last_start = steps.last().map_or(Duration::ZERO, |step| step.start);
        let settle_at = last_start
            .saturating_add(Duration::from_millis(timing.settle_ms))
            .max(steps.last().map_or(Duration::ZERO, |step| step.shown));

        Self { steps, settle_at }
    }

    #[must_use]
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// When the reveal is over and input suppression can be lifted
    #[must_use]
    pub const fn settle_at(&self) -> Duration {
        self.settle_at
    }

    /// Number of tiles already showing their color after `elapsed`
    #[must_use]
    pub fn shown_by(&self, elapsed: Duration) -> usize {
        self.steps.iter().take_while(|step| step.shown <= elapsed).count()
    }

    #[must_use]
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.settle_at
    }
}

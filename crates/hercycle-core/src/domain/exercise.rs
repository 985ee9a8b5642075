//! Exercise and routine types.

use serde::{Deserialize, Serialize};

use super::parse::{parse_seconds, parse_to_number};

/// Highlight context of the home page "today" routine.
pub const TODAY_CONTEXT: &str = "today-routine";

/// One entry of a routine, as authored.
///
/// All timing fields are free text and may be empty; they are only
/// interpreted at playback time via [`ExerciseParams::from_exercise`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    /// Display name, also used for cue and mode selection.
    pub name: String,
    /// Set count, or `-` when not applicable.
    pub sets: String,
    /// Rep count, possibly qualified (`"10 rounds"`).
    pub reps: String,
    /// Hold duration (`"20 sec"`, `"2 min"`).
    pub hold: String,
    /// Rest duration, `"-"` or `"As needed"` for none.
    pub rest: String,
    pub instructions: String,
}

impl Exercise {
    /// Convenience constructor for table-driven data.
    #[must_use]
    pub fn new(
        name: &str,
        sets: &str,
        reps: &str,
        hold: &str,
        rest: &str,
        instructions: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            hold: hold.to_string(),
            rest: rest.to_string(),
            instructions: instructions.to_string(),
        }
    }

    /// Walking segments are shown but never voice-guided.
    #[must_use]
    pub fn is_walk(&self) -> bool {
        self.name.to_lowercase().contains("walk")
    }
}

/// Numeric parameters derived from an [`Exercise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseParams {
    /// Always at least 1.
    pub sets: u32,
    pub reps: u32,
    pub hold_secs: u32,
    pub rest_secs: u32,
}

impl ExerciseParams {
    #[must_use]
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            sets: parse_to_number(&exercise.sets).max(1),
            reps: parse_to_number(&exercise.reps),
            hold_secs: parse_seconds(&exercise.hold),
            rest_secs: parse_seconds(&exercise.rest),
        }
    }
}

/// Which plan a routine belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoutineKind {
    #[default]
    Weekly,
    Period,
}

impl RoutineKind {
    /// Prefix used in highlight contexts.
    #[must_use]
    pub const fn context_prefix(self) -> &'static str {
        match self {
            Self::Weekly => "routine",
            Self::Period => "period",
        }
    }
}

/// An ordered list of exercises with its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// `"Monday"`, `"Day 3"`, ...
    pub day: String,
    pub title: String,
    pub goal: String,
    #[serde(default)]
    pub kind: RoutineKind,
    pub exercises: Vec<Exercise>,
}

impl Routine {
    /// Highlight context used when this routine is shown in the full
    /// routine listing, e.g. `routine-monday` or `period-day-1`.
    #[must_use]
    pub fn context(&self) -> String {
        format!("{}-{}", self.kind.context_prefix(), slug(&self.day))
    }
}

/// Identifier of the card that displays exercise `index` in `context`.
#[must_use]
pub fn card_id(index: usize, context: &str) -> String {
    if context == TODAY_CONTEXT {
        format!("exercise-card-{index}")
    } else {
        format!("routine-{context}-exercise-{index}")
    }
}

fn slug(day: &str) -> String {
    day.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

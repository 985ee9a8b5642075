//! Domain types and pure rules.

pub mod cues;
pub mod exercise;
pub mod log;
pub mod media;
pub mod mode;
pub mod parse;

pub use cues::{CuePair, GENERIC_CUES, cues_for};
pub use exercise::{Exercise, ExerciseParams, Routine, RoutineKind, TODAY_CONTEXT, card_id};
pub use log::{
    DailyLog, LogBook, LogError, PERIOD_PLAN_DAYS, WATER_MINIMUM_GLASSES, WATER_TOTAL_GLASSES,
};
pub use media::{ExerciseMedia, media_for};
pub use mode::{DEFAULT_CAT_COW_ROUNDS, ExecutionMode, classify};
pub use parse::{parse_seconds, parse_to_number};

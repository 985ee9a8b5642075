#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use catalog::{
    CatalogError, all_routines, find_routine, period_routines, todays_routine, weekly_routines,
};
pub use domain::{
    CuePair, DailyLog, ExecutionMode, Exercise, ExerciseMedia, ExerciseParams, LogBook, LogError,
    Routine, RoutineKind, TODAY_CONTEXT, WATER_MINIMUM_GLASSES, WATER_TOTAL_GLASSES, card_id,
    classify, cues_for, media_for, parse_seconds, parse_to_number,
};
pub use paths::{PathError, config_dir, load_settings, save_settings, settings_path};
pub use ports::{
    ControlAppearance, DetachedControl, HighlightError, HighlightPort, LogStore, LogStoreError,
    NoopHighlighter, TriggerControl,
};
pub use services::{LogService, LogServiceError};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;

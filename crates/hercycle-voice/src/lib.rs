#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod backend;
pub mod config;
pub mod error;
pub mod events;
pub mod routine;
pub mod speech;
pub mod timing;
pub mod voice;

// Re-export key types for convenience
pub use backend::console::ConsoleSpeech;
pub use backend::{SpeechEngine, Utterance, VoiceInfo};
pub use config::PlaybackConfig;
pub use error::{SessionError, VoiceError};
pub use events::RoutineEvent;
pub use routine::{RoutinePlayer, RoutineSession, RunOutcome, SessionState};
pub use speech::SpeechDriver;
pub use timing::{Cadence, delay, interval_count};
pub use voice::select_voice;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

//! Routine playback: the player (orchestrator) and the session that owns
//! the one-active-run state machine.

mod player;
pub mod script;
mod session;

pub use player::{RoutinePlayer, RunOutcome};
pub use session::{RoutineSession, SessionState};

//! Events emitted while a routine plays.

use hercycle_core::ExecutionMode;

use crate::routine::{RunOutcome, SessionState};

/// Progress of a routine session, for UI and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineEvent {
    /// Session state changed.
    StateChanged(SessionState),

    /// An exercise started; `index` is its position in the unfiltered list.
    ExerciseStarted {
        index: usize,
        name: String,
        mode: ExecutionMode,
    },

    /// A set of a multi-set exercise started (1-based).
    SetStarted { index: usize, set: u32, of: u32 },

    /// An exercise's narration ended (finished or cut short).
    ExerciseFinished { index: usize },

    /// The run is over and the UI has been reset.
    Finished { outcome: RunOutcome },
}

//! Execution-mode classification.
//!
//! Every voice-guided exercise is run in exactly one mode. The mode is a
//! pure function of the exercise name and its parsed rep/hold values,
//! evaluated in a fixed priority order:
//!
//! ```text
//!   name contains "cat"          → CatCow
//!   reps > 1  && hold > 0        → RepAndHold
//!   hold > 0  && reps <= 1       → StaticHold
//!   reps > 0  && hold == 0       → StandardRep
//!   otherwise                    → Noop
//! ```

use std::fmt;

/// Rounds used for cat-cow when the routine gives no rep count.
pub const DEFAULT_CAT_COW_ROUNDS: u32 = 10;

/// How an exercise is narrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Breath-paced spinal flow: inhale/exhale rounds.
    CatCow { rounds: u32 },
    /// Each rep is held for `hold_secs` before returning.
    RepAndHold { reps: u32, hold_secs: u32 },
    /// A single held position.
    StaticHold { hold_secs: u32 },
    /// Two-phase reps with no hold.
    StandardRep { reps: u32 },
    /// Nothing to narrate beyond the set announcements.
    Noop,
}

impl ExecutionMode {
    /// Short label for logs and listings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CatCow { .. } => "cat-cow",
            Self::RepAndHold { .. } => "rep-and-hold",
            Self::StaticHold { .. } => "static-hold",
            Self::StandardRep { .. } => "standard-rep",
            Self::Noop => "no-op",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an exercise into its [`ExecutionMode`].
#[must_use]
pub fn classify(name: &str, reps: u32, hold_secs: u32) -> ExecutionMode {
    if name.to_lowercase().contains("cat") {
        let rounds = if reps > 0 { reps } else { DEFAULT_CAT_COW_ROUNDS };
        return ExecutionMode::CatCow { rounds };
    }

    match (reps, hold_secs) {
        (r, h) if r > 1 && h > 0 => ExecutionMode::RepAndHold {
            reps: r,
            hold_secs: h,
        },
        (_, h) if h > 0 => ExecutionMode::StaticHold { hold_secs: h },
        (r, 0) if r > 0 => ExecutionMode::StandardRep { reps: r },
        _ => ExecutionMode::Noop,
    }
}

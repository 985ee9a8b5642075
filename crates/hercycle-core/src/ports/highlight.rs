//! Highlight port: visual "active exercise" state.
//!
//! The playback engine marks the exercise being narrated and unmarks it
//! when done. Adapters decide what "marked" means (a CSS class, a terminal
//! line, nothing at all). Failures are reported but the engine swallows
//! them: a missing card never interrupts a routine.

use thiserror::Error;

/// Errors an adapter may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// No visual element exists for the requested card.
    #[error("No highlight target '{0}'")]
    TargetMissing(String),
}

/// Toggles the active state of exercise cards.
pub trait HighlightPort: Send + Sync {
    /// Mark or unmark the card of exercise `index` (position in the
    /// unfiltered exercise list) within `context`.
    fn set_highlight(&self, index: usize, active: bool, context: &str)
    -> Result<(), HighlightError>;

    /// Remove the active state from every card. Must be idempotent.
    fn clear_all(&self);
}

/// A highlighter that does nothing, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHighlighter;

impl HighlightPort for NoopHighlighter {
    fn set_highlight(
        &self,
        _index: usize,
        _active: bool,
        _context: &str,
    ) -> Result<(), HighlightError> {
        Ok(())
    }

    fn clear_all(&self) {}
}

//! Voice and session error types.

/// Errors reported by a speech engine.
///
/// These never reach the caller of a routine run: the speech driver logs
/// them and degrades the utterance to a zero duration.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    /// The speech engine failed to produce an utterance.
    #[error("Speech synthesis failed: {0}")]
    SynthesisError(String),

    /// The utterance was cut short by a cancel of the engine queue.
    #[error("Utterance interrupted")]
    Interrupted,
}

/// Errors from the session coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A routine is already running (or still stopping).
    #[error("A routine is already active")]
    AlreadyActive,
}

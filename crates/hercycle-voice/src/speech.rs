//! Speech driver: speak-and-measure on top of a [`SpeechEngine`].
//!
//! The driver owns the selected voice and turns engine results into
//! durations. It never fails: a cancelled run yields a zero duration
//! without touching the engine, and an engine error is logged and also
//! reported as zero.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::backend::{SpeechEngine, Utterance, VoiceInfo};
use crate::error::VoiceError;
use crate::voice::select_voice;

/// Cheaply cloneable handle to a speech engine and its selected voice.
#[derive(Clone)]
pub struct SpeechDriver {
    inner: Arc<DriverInner>,
}

struct DriverInner {
    engine: Arc<dyn SpeechEngine>,

    /// User-chosen voice name, tried before the built-in order.
    preferred: Option<String>,

    /// Voice used for every utterance. Only held for reads and swaps,
    /// never across an `.await`.
    voice: RwLock<Option<VoiceInfo>>,
}

impl SpeechDriver {
    /// Wrap `engine`, resolving a voice from its current catalog.
    pub fn new(engine: Arc<dyn SpeechEngine>, preferred: Option<String>) -> Self {
        let driver = Self {
            inner: Arc::new(DriverInner {
                engine,
                preferred,
                voice: RwLock::new(None),
            }),
        };
        driver.resolve_voice();
        driver
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Arc<dyn SpeechEngine> {
        &self.inner.engine
    }

    /// The voice utterances are spoken with, if any.
    #[must_use]
    pub fn voice(&self) -> Option<VoiceInfo> {
        self.inner
            .voice
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-run voice selection against the engine's current catalog.
    pub fn resolve_voice(&self) -> Option<VoiceInfo> {
        let voices = self.inner.engine.voices();
        let selected = select_voice(&voices, self.inner.preferred.as_deref());
        match &selected {
            Some(voice) => tracing::debug!(voice = %voice.name, "Selected voice"),
            None => tracing::debug!("No voices available, using engine default"),
        }
        *self
            .inner
            .voice
            .write()
            .unwrap_or_else(PoisonError::into_inner) = selected.clone();
        selected
    }

    /// Re-resolve the voice whenever the engine reports a catalog change.
    ///
    /// [`RoutineSession::run`](crate::RoutineSession::run) keeps a watcher
    /// alive for the length of each run; other callers abort the returned
    /// task when they are done. Returns `None` for engines with a static
    /// catalog.
    pub fn watch_voices(&self) -> Option<JoinHandle<()>> {
        let mut changes = self.inner.engine.voices_changed()?;
        let driver = self.clone();
        Some(tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                tracing::debug!("Voice catalog changed");
                driver.resolve_voice();
            }
        }))
    }

    /// Speak `text` and return how long it took.
    ///
    /// Returns [`Duration::ZERO`] without speaking when `cancel` is already
    /// triggered, and [`Duration::ZERO`] when the engine reports an error.
    pub async fn speak(&self, text: &str, rate: f32, cancel: &CancellationToken) -> Duration {
        if cancel.is_cancelled() {
            return Duration::ZERO;
        }

        let utterance = Utterance::new(text, rate, self.voice());
        let started = Instant::now();
        match self.inner.engine.speak(utterance).await {
            Ok(()) => started.elapsed(),
            Err(VoiceError::Interrupted) => {
                tracing::debug!(text, "Utterance interrupted");
                Duration::ZERO
            }
            Err(e) => {
                tracing::warn!(error = %e, text, "Speech failed, continuing");
                Duration::ZERO
            }
        }
    }

    /// Cut off whatever is playing and speak `text` without waiting.
    ///
    /// Used for interval counts, which must keep pace with the clock.
    pub fn announce(&self, text: String, rate: f32) {
        self.inner.engine.cancel();
        let utterance = Utterance::new(text, rate, self.voice());
        let engine = Arc::clone(&self.inner.engine);
        tokio::spawn(async move {
            if let Err(e) = engine.speak(utterance).await {
                tracing::debug!(error = %e, "Announcement not completed");
            }
        });
    }

    /// Cancel the in-flight utterance and the engine queue.
    pub fn cancel(&self) {
        self.inner.engine.cancel();
    }
}

impl std::fmt::Debug for SpeechDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechDriver")
            .field("preferred", &self.inner.preferred)
            .field("voice", &self.voice())
            .finish_non_exhaustive()
    }
}

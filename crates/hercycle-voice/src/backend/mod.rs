//! Speech engine backend trait: engine-agnostic text-to-speech interface.
//!
//! The [`SpeechDriver`](crate::speech::SpeechDriver) operates on a trait
//! object (`Arc<dyn SpeechEngine>`) so that engines can be swapped without
//! touching the routine player.
//!
//! ## Backend implementations
//!
//! | Module      | Output                                        |
//! |-------------|-----------------------------------------------|
//! | [`console`] | Prints utterances, simulates speaking time    |

pub mod console;

use tokio::sync::watch;

use crate::error::VoiceError;

// ── Shared types ───────────────────────────────────────────────────

/// Pitch used for every utterance.
pub const DEFAULT_PITCH: f32 = 1.0;

/// Information about an available synthesis voice.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    /// Voice identifier (engine-specific).
    pub id: String,

    /// Human-readable display name, matched by the voice preference order.
    pub name: String,

    /// BCP 47 language tag, e.g. `en-US`.
    pub lang: String,
}

impl VoiceInfo {
    #[must_use]
    pub fn new(id: &str, name: &str, lang: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }
}

/// One unit of synthesized speech submitted to an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,

    /// Speaking rate multiplier (1.0 = engine normal).
    pub rate: f32,

    pub pitch: f32,

    /// Voice to speak with; `None` uses the engine default.
    pub voice: Option<VoiceInfo>,
}

impl Utterance {
    #[must_use]
    pub fn new(text: impl Into<String>, rate: f32, voice: Option<VoiceInfo>) -> Self {
        Self {
            text: text.into(),
            rate,
            pitch: DEFAULT_PITCH,
            voice,
        }
    }
}

// ── Speech engine trait ────────────────────────────────────────────

/// Backend-agnostic text-to-speech engine.
///
/// Utterances are queued: concurrent calls to [`speak`](Self::speak) play
/// one after another. [`cancel`](Self::cancel) flushes the queue, making
/// every pending and in-flight `speak` return [`VoiceError::Interrupted`].
#[async_trait::async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak one utterance, resolving when it has finished playing.
    async fn speak(&self, utterance: Utterance) -> Result<(), VoiceError>;

    /// Cancel the in-flight utterance and everything queued behind it.
    fn cancel(&self);

    /// Voices currently offered by the engine. May be empty until the
    /// engine has finished loading its catalog.
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Notification of voice catalog changes, for engines that load their
    /// catalog asynchronously.
    fn voices_changed(&self) -> Option<watch::Receiver<()>> {
        None
    }
}

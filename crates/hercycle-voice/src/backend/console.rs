//! Console speech engine.
//!
//! Writes each utterance to stdout and holds for roughly the time a
//! synthesizer would need to say it. Used by the CLI and for manual
//! testing without an audio stack.

use std::time::Duration;

use tokio::sync::{Mutex, watch};

use super::{SpeechEngine, Utterance, VoiceInfo};
use crate::error::VoiceError;

/// Speaking time per word at rate 1.0.
const MS_PER_WORD: f32 = 400.0;

/// Minimum speaking time of a non-empty utterance.
const MIN_UTTERANCE_MS: f32 = 250.0;

/// Prints utterances and simulates their duration.
pub struct ConsoleSpeech {
    /// Serializes utterances, one at a time.
    queue: Mutex<()>,

    /// Bumped on every cancel; speakers watch it to abort.
    generation: watch::Sender<u64>,

    voices: Vec<VoiceInfo>,

    /// Multiplier applied to simulated speaking time.
    pace: f32,
}

impl ConsoleSpeech {
    #[must_use]
    pub fn new(pace: f32) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            queue: Mutex::new(()),
            generation,
            voices: default_voices(),
            pace,
        }
    }

    /// Replace the advertised voice catalog.
    #[must_use]
    pub fn with_voices(mut self, voices: Vec<VoiceInfo>) -> Self {
        self.voices = voices;
        self
    }

    fn speaking_time(&self, utterance: &Utterance) -> Duration {
        let words = utterance.text.split_whitespace().count();
        if words == 0 {
            return Duration::ZERO;
        }
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let ms = ((words as f32 * MS_PER_WORD).max(MIN_UTTERANCE_MS) / utterance.rate.max(0.1)
            * self.pace.max(0.0))
        .round() as u64;
        Duration::from_millis(ms)
    }
}

impl Default for ConsoleSpeech {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[async_trait::async_trait]
impl SpeechEngine for ConsoleSpeech {
    async fn speak(&self, utterance: Utterance) -> Result<(), VoiceError> {
        let mut cancelled = self.generation.subscribe();
        let _turn = self.queue.lock().await;
        if cancelled.has_changed().unwrap_or(true) {
            return Err(VoiceError::Interrupted);
        }

        let voice = utterance.voice.as_ref().map_or("default", |v| v.name.as_str());
        println!("🔊 {}", utterance.text);
        tracing::debug!(voice, rate = utterance.rate, "Speaking");

        tokio::select! {
            () = tokio::time::sleep(self.speaking_time(&utterance)) => Ok(()),
            _ = cancelled.changed() => Err(VoiceError::Interrupted),
        }
    }

    fn cancel(&self) {
        self.generation.send_modify(|g| *g = g.wrapping_add(1));
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }
}

/// Voices advertised by the console engine.
fn default_voices() -> Vec<VoiceInfo> {
    vec![
        VoiceInfo::new("console-en-us", "Console US English", "en-US"),
        VoiceInfo::new("console-en-gb-female", "Console UK English Female", "en-GB"),
    ]
}

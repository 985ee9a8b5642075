//! Recording mocks shared by the playback tests.
//!
//! The engine speaks instantly and records every utterance with the
//! virtual time it started at; the highlighter records every toggle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hercycle_core::{Exercise, HighlightError, HighlightPort};
use hercycle_voice::{SpeechEngine, Utterance, VoiceError, VoiceInfo};
use tokio::sync::watch;
use tokio::time::Instant;

// ── Speech engine ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Spoken {
    pub text: String,
    pub rate: f32,
    pub voice: Option<String>,
    /// Virtual time since the engine was created.
    pub at: Duration,
}

pub struct RecordingEngine {
    spoken: Mutex<Vec<Spoken>>,
    cancels: AtomicUsize,
    fail_on: Option<String>,
    created: Instant,
    voices: Mutex<Vec<VoiceInfo>>,
    voices_changed: watch::Sender<()>,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(None))
    }

    /// An engine that reports a synthesis error for `text`.
    #[allow(dead_code)]
    pub fn failing_on(text: &str) -> Arc<Self> {
        Arc::new(Self::build(Some(text.to_string())))
    }

    fn build(fail_on: Option<String>) -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            cancels: AtomicUsize::new(0),
            fail_on,
            created: Instant::now(),
            voices: Mutex::new(vec![VoiceInfo::new("samantha", "Samantha", "en-US")]),
            voices_changed: watch::channel(()).0,
        }
    }

    /// Replace the voice catalog and notify watchers.
    #[allow(dead_code)]
    pub fn publish_voices(&self, voices: Vec<VoiceInfo>) {
        *self.voices.lock().unwrap() = voices;
        self.voices_changed.send_replace(());
    }

    pub fn spoken(&self) -> Vec<Spoken> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.spoken().into_iter().map(|s| s.text).collect()
    }

    #[allow(dead_code)]
    pub fn cancels(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechEngine for RecordingEngine {
    async fn speak(&self, utterance: Utterance) -> Result<(), VoiceError> {
        self.spoken.lock().unwrap().push(Spoken {
            text: utterance.text.clone(),
            rate: utterance.rate,
            voice: utterance.voice.as_ref().map(|v| v.name.clone()),
            at: self.created.elapsed(),
        });
        if self.fail_on.as_deref() == Some(utterance.text.as_str()) {
            return Err(VoiceError::SynthesisError("mock failure".to_string()));
        }
        Ok(())
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.lock().unwrap().clone()
    }

    fn voices_changed(&self) -> Option<watch::Receiver<()>> {
        Some(self.voices_changed.subscribe())
    }
}

// ── Highlighter ────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingHighlighter {
    calls: Mutex<Vec<(usize, bool, String)>>,
    clears: AtomicUsize,
    missing: Vec<usize>,
}

impl RecordingHighlighter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A highlighter with no card for the given indices.
    #[allow(dead_code)]
    pub fn missing(indices: &[usize]) -> Arc<Self> {
        Arc::new(Self {
            missing: indices.to_vec(),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<(usize, bool, String)> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl HighlightPort for RecordingHighlighter {
    fn set_highlight(
        &self,
        index: usize,
        active: bool,
        context: &str,
    ) -> Result<(), HighlightError> {
        if self.missing.contains(&index) {
            return Err(HighlightError::TargetMissing(format!("exercise-card-{index}")));
        }
        self.calls
            .lock()
            .unwrap()
            .push((index, active, context.to_string()));
        Ok(())
    }

    fn clear_all(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

// ── Data helpers ───────────────────────────────────────────────────

pub fn exercise(name: &str, sets: &str, reps: &str, hold: &str, rest: &str) -> Exercise {
    Exercise::new(name, sets, reps, hold, rest, "")
}

/// Texts that are bare numbers, i.e. spoken counts.
#[allow(dead_code)]
pub fn counts(texts: &[String]) -> Vec<String> {
    texts
        .iter()
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        .cloned()
        .collect()
}

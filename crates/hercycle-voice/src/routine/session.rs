//! Routine session: the single coordinator of "one active run".
//!
//! The session owns the run state machine and the global stop:
//!
//! ```text
//!   Idle ──run()──▶ Running ──stop()──▶ Stopping
//!    ▲                 │                    │
//!    └──── reset ◀─────┴────────────────────┘
//! ```
//!
//! `run` refuses to start unless the session is `Idle`, so two runs never
//! overlap. `stop` may be called from anywhere at any time. Each run is
//! stamped with an id; only the run that owns the slot can reset it.
//!
//! # Lock discipline
//!
//! `slot` is a `std::sync::Mutex` and is never held across an `.await` or
//! while calling into a port (highlighter, trigger control, engine).

use std::sync::{Arc, Mutex, PoisonError};

use hercycle_core::{ControlAppearance, Exercise, HighlightPort, TriggerControl};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::player::{RoutinePlayer, RunOutcome};
use crate::config::PlaybackConfig;
use crate::error::SessionError;
use crate::events::RoutineEvent;
use crate::speech::SpeechDriver;

/// Lifecycle of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing is playing.
    Idle,
    /// A routine is being narrated.
    Running,
    /// Stop was requested; the run is unwinding.
    Stopping,
}

/// Cheaply cloneable handle to the session.
#[derive(Clone)]
pub struct RoutineSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    player: RoutinePlayer,
    highlighter: Arc<dyn HighlightPort>,
    control: Arc<dyn TriggerControl>,
    slot: Mutex<RunSlot>,
    event_tx: mpsc::UnboundedSender<RoutineEvent>,
}

struct RunSlot {
    state: SessionState,
    /// Id of the run holding the slot.
    owner: Option<u64>,
    /// Id handed to the next run.
    next_run: u64,
    /// Token of the current run.
    cancel: Option<CancellationToken>,
    /// Control appearance captured when the run started.
    restore: Option<ControlAppearance>,
}

impl RoutineSession {
    /// Create a session.
    ///
    /// Returns the session and a receiver for [`RoutineEvent`]s.
    pub fn new(
        speech: SpeechDriver,
        highlighter: Arc<dyn HighlightPort>,
        control: Arc<dyn TriggerControl>,
        config: PlaybackConfig,
    ) -> (Self, mpsc::UnboundedReceiver<RoutineEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let player = RoutinePlayer::new(speech, Arc::clone(&highlighter), config)
            .with_events(event_tx.clone());

        let session = Self {
            inner: Arc::new(SessionInner {
                player,
                highlighter,
                control,
                slot: Mutex::new(RunSlot {
                    state: SessionState::Idle,
                    owner: None,
                    next_run: 0,
                    cancel: None,
                    restore: None,
                }),
                event_tx,
            }),
        };

        (session, event_rx)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock_slot().state
    }

    /// Whether a run is in progress (running or stopping).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state() != SessionState::Idle
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    /// Play `exercises` in `context` to the end or until stopped.
    ///
    /// The voice is re-resolved at the start and again whenever the engine
    /// reports a catalog change during the run. The UI reset runs whatever
    /// the outcome.
    pub async fn run(
        &self,
        exercises: &[Exercise],
        context: &str,
    ) -> Result<RunOutcome, SessionError> {
        let (run, cancel) = self.begin()?;

        let speech = self.inner.player.speech();
        speech.resolve_voice();
        let watcher = speech.watch_voices();
        let outcome = self.inner.player.play(exercises, context, &cancel).await;
        if let Some(watcher) = watcher {
            watcher.abort();
        }

        self.reset_ui(run);
        self.emit(RoutineEvent::Finished { outcome });
        Ok(outcome)
    }

    /// Start a run if idle, otherwise stop the active one.
    ///
    /// Returns `None` when the call stopped a run.
    pub async fn toggle(
        &self,
        exercises: &[Exercise],
        context: &str,
    ) -> Result<Option<RunOutcome>, SessionError> {
        if self.is_active() {
            self.stop();
            return Ok(None);
        }
        self.run(exercises, context).await.map(Some)
    }

    /// Global stop.
    ///
    /// Signals the active run, cuts off speech and clears every highlight.
    /// Safe to call at any time, any number of times. Returns whether a
    /// running routine was signalled.
    pub fn stop(&self) -> bool {
        let signalled = {
            let mut slot = self.lock_slot();
            if slot.state == SessionState::Running {
                slot.state = SessionState::Stopping;
                if let Some(cancel) = &slot.cancel {
                    cancel.cancel();
                }
                true
            } else {
                false
            }
        };

        if signalled {
            tracing::info!("Stop requested");
            self.emit(RoutineEvent::StateChanged(SessionState::Stopping));
        }
        self.inner.player.speech().cancel();
        self.inner.highlighter.clear_all();
        signalled
    }

    // ── Internal helpers ───────────────────────────────────────────

    /// Move Idle → Running and hand out the run's id and token.
    fn begin(&self) -> Result<(u64, CancellationToken), SessionError> {
        let cancel = CancellationToken::new();
        let run = {
            let mut slot = self.lock_slot();
            if slot.state != SessionState::Idle {
                return Err(SessionError::AlreadyActive);
            }
            let run = slot.next_run;
            slot.next_run = slot.next_run.wrapping_add(1);
            slot.state = SessionState::Running;
            slot.owner = Some(run);
            slot.cancel = Some(cancel.clone());
            run
        };

        let original = self.inner.control.appearance();
        self.inner.control.set_appearance(ControlAppearance::running());
        {
            let mut slot = self.lock_slot();
            if slot.owner == Some(run) {
                slot.restore = Some(original);
            }
        }

        self.emit(RoutineEvent::StateChanged(SessionState::Running));
        Ok((run, cancel))
    }

    /// End `run`: restore the trigger control, return to `Idle`, cancel
    /// speech and clear highlights.
    ///
    /// A no-op unless `run` still owns the slot, so repeated calls are
    /// harmless.
    fn reset_ui(&self, run: u64) {
        let restore = {
            let mut slot = self.lock_slot();
            if slot.owner != Some(run) {
                return;
            }
            if let Some(cancel) = slot.cancel.take() {
                cancel.cancel();
            }
            slot.owner = None;
            slot.state = SessionState::Idle;
            slot.restore.take()
        };

        if let Some(appearance) = restore {
            self.inner.control.set_appearance(appearance);
        }
        self.inner.player.speech().cancel();
        self.inner.highlighter.clear_all();

        tracing::debug!(run, "Session reset");
        self.emit(RoutineEvent::StateChanged(SessionState::Idle));
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, RunSlot> {
        self.inner
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Emit an event; a dropped receiver is ignored.
    fn emit(&self, event: RoutineEvent) {
        if self.inner.event_tx.send(event).is_err() {
            tracing::trace!("Routine event receiver dropped");
        }
    }
}

impl std::fmt::Debug for RoutineSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutineSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

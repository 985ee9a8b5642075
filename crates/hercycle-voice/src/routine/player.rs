//! Routine player: walks exercises and narrates them.
//!
//! ```text
//!   intro ─▶ for each exercise (walks skipped, indices kept)
//!              highlight on ─▶ "Next movement..."
//!              for each set
//!                "Set n" (multi-set only)
//!                mode handler (cat-cow | rep-and-hold | static-hold | standard-rep | no-op)
//!                rest (unless last set of last exercise)
//!              highlight off ─▶ pause
//!          ─▶ closing phrase (unless stopped)
//! ```
//!
//! Every loop boundary and every speech, delay and tick checks the run's
//! cancellation token. The player does not reset the UI; that is the
//! session's job.

use std::sync::Arc;

use hercycle_core::{
    CuePair, ExecutionMode, Exercise, ExerciseParams, HighlightPort, classify, cues_for,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::script;
use crate::config::PlaybackConfig;
use crate::events::RoutineEvent;
use crate::speech::SpeechDriver;
use crate::timing::{delay, interval_count};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every exercise was narrated and the closing phrase spoken.
    Completed,
    /// The run was cancelled before the end.
    Stopped,
}

/// Narrates a list of exercises.
pub struct RoutinePlayer {
    speech: SpeechDriver,
    highlighter: Arc<dyn HighlightPort>,
    config: PlaybackConfig,
    events: Option<mpsc::UnboundedSender<RoutineEvent>>,
}

impl RoutinePlayer {
    pub fn new(
        speech: SpeechDriver,
        highlighter: Arc<dyn HighlightPort>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            speech,
            highlighter,
            config,
            events: None,
        }
    }

    /// Send progress events to `tx`.
    #[must_use]
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<RoutineEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub const fn speech(&self) -> &SpeechDriver {
        &self.speech
    }

    pub const fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Play `exercises`, highlighting cards in `context`, until done or
    /// `cancel` fires.
    pub async fn play(
        &self,
        exercises: &[Exercise],
        context: &str,
        cancel: &CancellationToken,
    ) -> RunOutcome {
        let guided: Vec<(usize, &Exercise)> = exercises
            .iter()
            .enumerate()
            .filter(|(_, ex)| !ex.is_walk())
            .collect();

        tracing::info!(
            context,
            total = exercises.len(),
            guided = guided.len(),
            "Starting routine"
        );

        let narrator = Narrator {
            speech: &self.speech,
            config: &self.config,
            cancel,
        };

        narrator.say(script::INTRO, self.config.narration_rate).await;
        narrator.pause(self.config.intro_pause).await;

        for (position, &(index, exercise)) in guided.iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }
            let is_last_exercise = position + 1 == guided.len();

            self.highlight(index, true, context);
            narrator
                .say(&script::next_movement(&exercise.name), self.config.narration_rate)
                .await;
            narrator.pause(self.config.announce_pause).await;

            let params = ExerciseParams::from_exercise(exercise);
            let cues = cues_for(&exercise.name);
            let mode = classify(&exercise.name, params.reps, params.hold_secs);
            tracing::debug!(index, name = %exercise.name, %mode, ?params, "Exercise");
            self.emit(RoutineEvent::ExerciseStarted {
                index,
                name: exercise.name.clone(),
                mode,
            });

            for set in 1..=params.sets {
                if cancel.is_cancelled() {
                    break;
                }

                if params.sets > 1 {
                    self.emit(RoutineEvent::SetStarted {
                        index,
                        set,
                        of: params.sets,
                    });
                    narrator
                        .say(&script::set_number(set), self.config.narration_rate)
                        .await;
                }

                narrator.perform(mode, cues).await;

                let is_last_set = set == params.sets;
                if params.rest_secs > 0 && !(is_last_exercise && is_last_set) {
                    narrator.rest(params.rest_secs).await;
                }
            }

            self.highlight(index, false, context);
            self.emit(RoutineEvent::ExerciseFinished { index });

            if !is_last_exercise && !cancel.is_cancelled() {
                narrator.pause(self.config.between_exercises_pause).await;
            }
        }

        if cancel.is_cancelled() {
            tracing::info!(context, "Routine stopped");
            return RunOutcome::Stopped;
        }

        narrator.say(script::CLOSING, self.config.narration_rate).await;
        tracing::info!(context, "Routine completed");
        RunOutcome::Completed
    }

    fn highlight(&self, index: usize, active: bool, context: &str) {
        if let Err(e) = self.highlighter.set_highlight(index, active, context) {
            tracing::warn!(error = %e, index, active, "Highlight failed");
        }
    }

    fn emit(&self, event: RoutineEvent) {
        if let Some(tx) = &self.events {
            if tx.send(event).is_err() {
                tracing::trace!("Routine event receiver dropped");
            }
        }
    }
}

/// Speech and timing bound to one run's token.
struct Narrator<'a> {
    speech: &'a SpeechDriver,
    config: &'a PlaybackConfig,
    cancel: &'a CancellationToken,
}

impl Narrator<'_> {
    async fn say(&self, text: &str, rate: f32) {
        self.speech.speak(text, rate, self.cancel).await;
    }

    async fn pause(&self, duration: std::time::Duration) {
        delay(duration, self.cancel).await;
    }

    async fn count(&self, secs: u32) {
        interval_count(
            self.speech,
            secs,
            self.config.count_rate,
            self.config.cadence,
            self.cancel,
        )
        .await;
    }

    /// One set of movement narration.
    async fn perform(&self, mode: ExecutionMode, cues: CuePair) {
        match mode {
            ExecutionMode::CatCow { rounds } => self.cat_cow(rounds).await,
            ExecutionMode::RepAndHold { reps, hold_secs } => {
                self.rep_and_hold(reps, hold_secs, cues).await;
            }
            ExecutionMode::StaticHold { hold_secs } => self.static_hold(hold_secs).await,
            ExecutionMode::StandardRep { reps } => self.standard_rep(reps, cues).await,
            ExecutionMode::Noop => {}
        }
    }

    async fn cat_cow(&self, rounds: u32) {
        let c = self.config;
        self.say(script::CAT_COW_SETUP, c.narration_rate).await;
        self.pause(c.cat_cow_setup_pause).await;

        for _ in 0..rounds {
            if self.cancel.is_cancelled() {
                break;
            }
            self.say(script::INHALE, c.cat_cow_rate).await;
            self.pause(c.breath_pause).await;
            self.say(script::EXHALE, c.cat_cow_rate).await;
            self.pause(c.breath_pause).await;
        }
    }

    async fn rep_and_hold(&self, reps: u32, hold_secs: u32, cues: CuePair) {
        let c = self.config;
        self.say(script::REP_HOLD_READY, c.narration_rate).await;
        self.pause(c.ready_pause).await;

        for _ in 0..reps {
            if self.cancel.is_cancelled() {
                break;
            }
            self.say(&script::up_and_hold(cues.up), c.cue_rate).await;
            self.count(hold_secs).await;
            self.say(cues.down, c.cue_rate).await;
            self.pause(c.rep_hold_down_pause).await;
        }
    }

    async fn static_hold(&self, hold_secs: u32) {
        let c = self.config;
        self.say(script::STATIC_HOLD_READY, c.narration_rate).await;
        self.pause(c.ready_pause).await;
        self.count(hold_secs).await;
        self.say(script::STATIC_HOLD_RELEASE, c.narration_rate).await;
    }

    async fn standard_rep(&self, reps: u32, cues: CuePair) {
        let c = self.config;
        self.say(script::STANDARD_REP_READY, c.narration_rate).await;
        self.pause(c.ready_pause).await;

        for rep in 1..=reps {
            if self.cancel.is_cancelled() {
                break;
            }
            self.say(cues.up, c.cue_rate).await;
            self.pause(c.rep_phase_pause).await;
            self.say(&script::counted_down(cues.down, rep), c.cue_rate)
                .await;
            self.pause(c.rep_phase_pause).await;
        }
    }

    /// Long rests are counted in fives; short ones every second.
    async fn rest(&self, secs: u32) {
        let c = self.config;
        self.say(script::REST, c.narration_rate).await;

        if secs > c.short_rest_limit_secs {
            self.count(secs).await;
            return;
        }
        for n in 1..=secs {
            if self.cancel.is_cancelled() {
                break;
            }
            self.say(&n.to_string(), c.count_rate).await;
            self.pause(c.short_rest_pause).await;
        }
    }
}

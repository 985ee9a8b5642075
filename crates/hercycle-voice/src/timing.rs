//! Timing primitives: cancellable delay and the interval counter.
//!
//! Both check the run's [`CancellationToken`] only at their checkpoints:
//! [`delay`] on entry, [`interval_count`] once per tick. A stop issued in
//! between is observed at the next checkpoint.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::speech::SpeechDriver;

/// Ticks between spoken counts.
pub const ANNOUNCE_EVERY: u32 = 5;

/// Wait for `duration`, or return at once if `cancel` is already triggered.
///
/// A cancel during the wait does not cut it short.
pub async fn delay(duration: Duration, cancel: &CancellationToken) {
    if cancel.is_cancelled() {
        return;
    }
    tokio::time::sleep(duration).await;
}

/// Tick length of the interval counter and the wait after its last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub tick: Duration,

    /// Lets a count triggered on the final tick finish speaking.
    pub grace: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            grace: Duration::from_secs(1),
        }
    }
}

impl Cadence {
    #[must_use]
    pub fn scaled(self, pace: f32) -> Self {
        Self {
            tick: self.tick.mul_f32(pace),
            grace: self.grace.mul_f32(pace),
        }
    }
}

/// Count `total_secs` ticks, announcing every fifth one aloud.
///
/// Each announcement cuts off any utterance still playing. After the last
/// tick the counter waits one grace period before returning. A cancel is
/// checked at every tick and ends the count there, without the grace wait.
/// A zero total returns immediately.
pub async fn interval_count(
    speech: &SpeechDriver,
    total_secs: u32,
    rate: f32,
    cadence: Cadence,
    cancel: &CancellationToken,
) {
    if total_secs == 0 || cancel.is_cancelled() {
        return;
    }

    let mut ticker = tokio::time::interval_at(Instant::now() + cadence.tick, cadence.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut current = 0;
    loop {
        ticker.tick().await;
        if cancel.is_cancelled() {
            tracing::debug!(current, total_secs, "Interval count stopped");
            return;
        }

        current += 1;
        if current % ANNOUNCE_EVERY == 0 {
            tracing::debug!(current, "Interval announcement");
            speech.announce(current.to_string(), rate);
        }

        if current >= total_secs {
            tokio::time::sleep(cadence.grace).await;
            return;
        }
    }
}

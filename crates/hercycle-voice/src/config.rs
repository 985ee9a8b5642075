//! Playback timing and speech-rate configuration.

use std::time::Duration;

use crate::timing::Cadence;

/// Largest accepted speech-rate factor.
pub const MAX_RATE_FACTOR: f32 = 4.0;

/// Pauses and speech rates used by the routine player.
///
/// The defaults reproduce the reference narration pacing. Use
/// [`with_pace`](Self::with_pace) to scale every pause and the counting
/// tick together.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Settle time after the intro phrase.
    pub intro_pause: Duration,
    /// Pause after "Next movement...".
    pub announce_pause: Duration,
    /// Pause after the cat-cow setup cue.
    pub cat_cow_setup_pause: Duration,
    /// Pause after each inhale and exhale phrase.
    pub breath_pause: Duration,
    /// Pause after the ready cue of every timed mode ("Get ready",
    /// "Move into position", "Prepare").
    pub ready_pause: Duration,
    /// Pause after the down cue of a held rep.
    pub rep_hold_down_pause: Duration,
    /// Pause after each phase of a standard rep.
    pub rep_phase_pause: Duration,
    /// Pause between spoken counts of a short rest.
    pub short_rest_pause: Duration,
    /// Pause between exercises.
    pub between_exercises_pause: Duration,

    /// Counting tick and the trailing grace period.
    pub cadence: Cadence,

    /// Rests longer than this are counted by the interval counter; shorter
    /// ones are counted aloud every second.
    pub short_rest_limit_secs: u32,

    /// Rate of announcements ("Next movement", rest, closing).
    pub narration_rate: f32,
    /// Rate of the slow cat-cow breath cues.
    pub cat_cow_rate: f32,
    /// Rate of movement cues.
    pub cue_rate: f32,
    /// Rate of spoken counts.
    pub count_rate: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            intro_pause: Duration::from_millis(1000),
            announce_pause: Duration::from_millis(2000),
            cat_cow_setup_pause: Duration::from_millis(3000),
            breath_pause: Duration::from_millis(3500),
            ready_pause: Duration::from_millis(1000),
            rep_hold_down_pause: Duration::from_millis(2000),
            rep_phase_pause: Duration::from_millis(1500),
            short_rest_pause: Duration::from_millis(800),
            between_exercises_pause: Duration::from_millis(1500),
            cadence: Cadence::default(),
            short_rest_limit_secs: 10,
            narration_rate: 0.9,
            cat_cow_rate: 0.85,
            cue_rate: 1.0,
            count_rate: 1.2,
        }
    }
}

impl PlaybackConfig {
    /// Scale every pause and the counting cadence by `pace`.
    ///
    /// A pace of 0.5 plays twice as fast; non-positive or non-finite
    /// values are ignored.
    #[must_use]
    pub fn with_pace(mut self, pace: f32) -> Self {
        if !(pace.is_finite() && pace > 0.0) {
            tracing::warn!(pace, "Ignoring invalid pace");
            return self;
        }
        for pause in [
            &mut self.intro_pause,
            &mut self.announce_pause,
            &mut self.cat_cow_setup_pause,
            &mut self.breath_pause,
            &mut self.ready_pause,
            &mut self.rep_hold_down_pause,
            &mut self.rep_phase_pause,
            &mut self.short_rest_pause,
            &mut self.between_exercises_pause,
        ] {
            *pause = pause.mul_f32(pace);
        }
        self.cadence = self.cadence.scaled(pace);
        self
    }

    /// Multiply every speech rate by `factor`.
    #[must_use]
    pub fn with_rate_factor(mut self, factor: f32) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            tracing::warn!(factor, "Ignoring invalid rate factor");
            return self;
        }
        self.narration_rate *= factor;
        self.cat_cow_rate *= factor;
        self.cue_rate *= factor;
        self.count_rate *= factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_scales_pauses_and_tick() {
        let config = PlaybackConfig::default().with_pace(0.5);
        assert_eq!(config.announce_pause, Duration::from_millis(1000));
        assert_eq!(config.breath_pause, Duration::from_millis(1750));
        assert_eq!(config.cadence.tick, Duration::from_millis(500));
    }

    #[test]
    fn invalid_pace_is_ignored() {
        assert_eq!(PlaybackConfig::default().with_pace(0.0), PlaybackConfig::default());
        assert_eq!(
            PlaybackConfig::default().with_pace(f32::NAN),
            PlaybackConfig::default()
        );
    }

    #[test]
    fn rate_factor_multiplies_rates() {
        let config = PlaybackConfig::default().with_rate_factor(2.0);
        assert!((config.count_rate - 2.4).abs() < 1e-6);
        assert!((config.cue_rate - 2.0).abs() < 1e-6);
    }
}

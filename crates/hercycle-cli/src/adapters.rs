//! Console implementations of the playback ports.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use hercycle_core::{
    ControlAppearance, DetachedControl, HighlightError, HighlightPort, TriggerControl, card_id,
};

/// Marks the active exercise card on stdout.
///
/// Only cards `0..card_count` exist; anything else is reported as missing.
#[derive(Debug)]
pub struct ConsoleHighlighter {
    card_count: usize,
    active: Mutex<BTreeSet<String>>,
}

impl ConsoleHighlighter {
    pub const fn new(card_count: usize) -> Self {
        Self {
            card_count,
            active: Mutex::new(BTreeSet::new()),
        }
    }

    /// Cards currently highlighted.
    pub fn active(&self) -> Vec<String> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl HighlightPort for ConsoleHighlighter {
    fn set_highlight(
        &self,
        index: usize,
        active: bool,
        context: &str,
    ) -> Result<(), HighlightError> {
        let id = card_id(index, context);
        if index >= self.card_count {
            return Err(HighlightError::TargetMissing(id));
        }

        let mut cards = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if active {
            if cards.insert(id.clone()) {
                println!("\n▶ [{id}]");
            }
        } else {
            cards.remove(&id);
        }
        Ok(())
    }

    fn clear_all(&self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// The start/stop trigger, echoed to stdout whenever it changes.
#[derive(Debug, Default)]
pub struct ConsoleControl {
    inner: DetachedControl,
}

impl TriggerControl for ConsoleControl {
    fn appearance(&self) -> ControlAppearance {
        self.inner.appearance()
    }

    fn set_appearance(&self, appearance: ControlAppearance) {
        if appearance != self.inner.appearance() {
            println!("[{}]", appearance.label);
        }
        self.inner.set_appearance(appearance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hercycle_core::TODAY_CONTEXT;

    #[test]
    fn highlight_tracks_active_cards() {
        let highlighter = ConsoleHighlighter::new(3);
        highlighter.set_highlight(1, true, TODAY_CONTEXT).unwrap();
        assert_eq!(highlighter.active(), vec!["exercise-card-1".to_string()]);

        highlighter.set_highlight(1, false, TODAY_CONTEXT).unwrap();
        assert!(highlighter.active().is_empty());
    }

    #[test]
    fn highlight_out_of_range_is_missing() {
        let highlighter = ConsoleHighlighter::new(2);
        let err = highlighter.set_highlight(2, true, "routine-monday").unwrap_err();
        assert_eq!(
            err,
            HighlightError::TargetMissing("routine-routine-monday-exercise-2".to_string())
        );
    }

    #[test]
    fn clear_all_is_idempotent() {
        let highlighter = ConsoleHighlighter::new(4);
        highlighter.set_highlight(0, true, TODAY_CONTEXT).unwrap();
        highlighter.set_highlight(3, true, TODAY_CONTEXT).unwrap();

        highlighter.clear_all();
        highlighter.clear_all();
        assert!(highlighter.active().is_empty());
    }

    #[test]
    fn control_round_trip() {
        let control = ConsoleControl::default();
        let original = control.appearance();

        control.set_appearance(ControlAppearance::running());
        assert_eq!(control.appearance(), ControlAppearance::running());

        control.set_appearance(original.clone());
        assert_eq!(control.appearance(), original);
    }
}

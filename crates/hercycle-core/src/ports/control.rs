//! Trigger control port: the start/stop button of a routine.
//!
//! While a routine runs, its trigger shows a "stop" appearance. When the
//! run ends (naturally or stopped), the appearance captured before the run
//! is put back.

use serde::{Deserialize, Serialize};

/// Label and style of a trigger control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAppearance {
    pub label: String,
    /// Adapter-defined style token (CSS classes, a color name, ...).
    pub style: String,
}

impl ControlAppearance {
    #[must_use]
    pub fn new(label: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: style.into(),
        }
    }

    /// Appearance shown while a routine is running.
    #[must_use]
    pub fn running() -> Self {
        Self::new("Stop Routine", "stop")
    }
}

/// Read and replace the appearance of a trigger control.
pub trait TriggerControl: Send + Sync {
    fn appearance(&self) -> ControlAppearance;

    fn set_appearance(&self, appearance: ControlAppearance);
}

/// A control with no visual surface; it simply remembers its appearance.
#[derive(Debug)]
pub struct DetachedControl {
    current: std::sync::Mutex<ControlAppearance>,
}

impl DetachedControl {
    #[must_use]
    pub fn new(initial: ControlAppearance) -> Self {
        Self {
            current: std::sync::Mutex::new(initial),
        }
    }
}

impl Default for DetachedControl {
    fn default() -> Self {
        Self::new(ControlAppearance::new("Start Routine", "start"))
    }
}

impl TriggerControl for DetachedControl {
    fn appearance(&self) -> ControlAppearance {
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn set_appearance(&self, appearance: ControlAppearance) {
        *self
            .current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = appearance;
    }
}

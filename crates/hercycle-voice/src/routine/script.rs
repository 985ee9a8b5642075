//! Narration phrases.

pub const INTRO: &str = "Let's begin your practice. Find a comfortable space.";
pub const CLOSING: &str = "Namaste. Great practice today.";
pub const REST: &str = "Rest... Breathe deeply.";

pub const CAT_COW_SETUP: &str = "Come to all fours. Hands under shoulders.";
pub const INHALE: &str = "Inhale... Drop your belly... Look up.";
pub const EXHALE: &str = "Exhale... Round your spine... Chin to chest.";

pub const REP_HOLD_READY: &str = "Get ready... Begin.";
pub const STATIC_HOLD_READY: &str = "Move into position... Lift... and Hold.";
pub const STATIC_HOLD_RELEASE: &str = "Gently release.";
pub const STANDARD_REP_READY: &str = "Prepare... Go.";

pub fn next_movement(name: &str) -> String {
    format!("Next movement... {name}")
}

pub fn set_number(set: u32) -> String {
    format!("Set {set}")
}

pub fn up_and_hold(up: &str) -> String {
    format!("{up}... and Hold.")
}

/// Down cue followed by the rep number, e.g. `"Push back. 3"`.
pub fn counted_down(down: &str, rep: u32) -> String {
    format!("{down} {rep}")
}

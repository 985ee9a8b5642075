//! Keyword-driven narration cues.
//!
//! Each movement is narrated with a pair of short phrases: `up` for the
//! working (or begin) phase and `down` for the return (or release) phase.
//! The pair is picked from a fixed, ordered rule table by case-insensitive
//! substring match on the exercise name. First match wins.

/// The begin/release phrases for one movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuePair {
    pub up: &'static str,
    pub down: &'static str,
}

/// One row of the cue table: any keyword matching selects `cues`.
#[derive(Debug)]
struct CueRule {
    keywords: &'static [&'static str],
    cues: CuePair,
}

impl CueRule {
    fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|k| lowered_name.contains(k))
    }
}

const CUE_RULES: &[CueRule] = &[
    CueRule {
        keywords: &["squat"],
        cues: CuePair {
            up: "Lower down slowly...",
            down: "And... Up.",
        },
    },
    CueRule {
        keywords: &["bridge", "lift"],
        cues: CuePair {
            up: "Lift your hips high...",
            down: "Lower to the floor.",
        },
    },
    CueRule {
        keywords: &["lunge"],
        cues: CuePair {
            up: "Step forward...",
            down: "Push back.",
        },
    },
    CueRule {
        keywords: &["twist"],
        cues: CuePair {
            up: "Gentle twist...",
            down: "Return to center.",
        },
    },
    CueRule {
        keywords: &["tilt"],
        cues: CuePair {
            up: "Tilt pelvis up...",
            down: "Release.",
        },
    },
];

/// Cues used when no rule matches.
pub const GENERIC_CUES: CuePair = CuePair {
    up: "Begin movement...",
    down: "Relax.",
};

/// Resolve the cue pair for an exercise name.
#[must_use]
pub fn cues_for(name: &str) -> CuePair {
    let lowered = name.to_lowercase();
    CUE_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(GENERIC_CUES, |rule| rule.cues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squat_cues() {
        let cues = cues_for("Bodyweight Squats");
        assert_eq!(cues.up, "Lower down slowly...");
        assert_eq!(cues.down, "And... Up.");
    }

    #[test]
    fn bridge_and_lift_share_cues() {
        assert_eq!(cues_for("Glute Bridge"), cues_for("Leg Lift"));
        assert_eq!(cues_for("Bridge Pose").down, "Lower to the floor.");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(cues_for("PELVIC TILTS").up, "Tilt pelvis up...");
        assert_eq!(cues_for("reclined twist").down, "Return to center.");
    }

    #[test]
    fn first_rule_wins() {
        // Both "squat" and "lunge" match; squat comes first in the table.
        assert_eq!(cues_for("Squat to Lunge").up, "Lower down slowly...");
    }

    #[test]
    fn falls_back_to_generic() {
        assert_eq!(cues_for("Plank"), GENERIC_CUES);
        assert_eq!(cues_for(""), GENERIC_CUES);
    }
}

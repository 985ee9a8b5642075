//! Built-in routine catalog.
//!
//! Seven weekly routines (Monday first) and a five-day period plan. The
//! data is static and built once on first access.

use std::sync::LazyLock;

use chrono::Weekday;
use thiserror::Error;

use crate::domain::{Exercise, PERIOD_PLAN_DAYS, Routine, RoutineKind};

/// Errors from catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No routine named '{0}'")]
    UnknownDay(String),
}

fn routine(
    kind: RoutineKind,
    day: &str,
    title: &str,
    goal: &str,
    exercises: Vec<Exercise>,
) -> Routine {
    Routine {
        day: day.to_string(),
        title: title.to_string(),
        goal: goal.to_string(),
        kind,
        exercises,
    }
}

fn ex(name: &str, sets: &str, reps: &str, hold: &str, rest: &str, instructions: &str) -> Exercise {
    Exercise::new(name, sets, reps, hold, rest, instructions)
}

/// Period-plan entries only carry a hold (and occasionally sets or reps).
fn hold(name: &str, hold: &str, instructions: &str) -> Exercise {
    Exercise::new(name, "", "", hold, "", instructions)
}

static WEEKLY: LazyLock<Vec<Routine>> = LazyLock::new(|| {
    use RoutineKind::Weekly;
    vec![
        routine(
            Weekly,
            "Monday",
            "Gentle Full-Body Flow",
            "Relax lower back & abdomen.",
            vec![
                ex(
                    "Brisk Walk / Light Dance",
                    "-",
                    "-",
                    "5 min",
                    "-",
                    "Start your session with a light warm-up.",
                ),
                ex(
                    "Cat–Cow Pose",
                    "1",
                    "10 rounds",
                    "~1 min total",
                    "10 sec",
                    "Move with your breath.",
                ),
                ex("Child’s Pose", "1", "1", "2 min", "15 sec", "Fold forward."),
                ex("Bridge Pose", "2", "1", "20 sec", "20 sec", "Lift hips."),
                ex(
                    "Seated Forward Bend",
                    "1",
                    "1",
                    "2 min",
                    "15 sec",
                    "Hinge forward.",
                ),
                ex("Deep Breathing", "1", "-", "2 min", "-", "Inhale slowly."),
            ],
        ),
        routine(
            Weekly,
            "Tuesday",
            "Lower-Body Strength",
            "Strengthen pelvic & leg muscles.",
            vec![
                ex("Warm-up Walk", "-", "-", "5 min", "-", "Begin with a walk."),
                ex("Bodyweight Squats", "2", "10", "-", "30 sec", "Lower hips."),
                ex("Forward Lunges", "2", "10", "-", "30 sec", "Step forward."),
                ex(
                    "Glute Bridge",
                    "2",
                    "15",
                    "2 sec",
                    "30 sec",
                    "Squeeze glutes.",
                ),
                ex(
                    "Butterfly Stretch",
                    "1",
                    "1",
                    "2 min",
                    "15 sec",
                    "Feet together.",
                ),
                ex("Deep Breathing", "1", "-", "2 min", "-", "Relax."),
            ],
        ),
        routine(
            Weekly,
            "Wednesday",
            "Core & Stretch",
            "Ease cramps & improve flexibility.",
            vec![
                ex("Pelvic Tilts", "1", "10", "2 sec", "10 sec", "Tilt pelvis."),
                ex("Cobra Pose", "2", "1", "30 sec", "15 sec", "Lift chest."),
                ex(
                    "Bridge Pose",
                    "2",
                    "1",
                    "20 sec",
                    "20 sec",
                    "Strengthen back.",
                ),
                ex(
                    "Seated Forward Bend",
                    "1",
                    "1",
                    "2 min",
                    "15 sec",
                    "Focus on stretch.",
                ),
                ex("Child’s Pose", "1", "1", "2 min", "15 sec", "Relaxation."),
                ex("Deep Breathing", "1", "-", "2 min", "-", "Calm body."),
            ],
        ),
        routine(
            Weekly,
            "Thursday",
            "Yoga for Periods",
            "Calm the body, reduce cramps & fatigue.",
            vec![
                ex(
                    "Cat–Cow Pose",
                    "1",
                    "10 rounds",
                    "~1 min",
                    "10 sec",
                    "Spinal flow.",
                ),
                ex("Child’s Pose", "1", "1", "2 min", "15 sec", "Ease tension."),
                ex(
                    "Reclined Twist",
                    "1",
                    "1",
                    "1 min",
                    "10 sec",
                    "Twist gently.",
                ),
                ex("Bridge Pose", "1", "1", "1 min", "20 sec", "Open chest."),
                ex(
                    "Deep Belly Breathing",
                    "1",
                    "-",
                    "3 min",
                    "-",
                    "Calm system.",
                ),
            ],
        ),
        routine(
            Weekly,
            "Friday",
            "Core & Posture",
            "Improve core strength & blood flow.",
            vec![
                ex("Plank", "2", "1", "20 sec", "30 sec", "Hold straight."),
                ex("Pelvic Tilts", "1", "10", "2 sec", "15 sec", "Engage core."),
                ex("Bridge Pose", "2", "1", "20 sec", "20 sec", "Posture."),
                ex(
                    "Seated Forward Bend",
                    "1",
                    "1",
                    "2 min",
                    "15 sec",
                    "Loosen back.",
                ),
                ex("Deep Breathing", "1", "-", "2 min", "-", "Recover."),
            ],
        ),
        routine(
            Weekly,
            "Saturday",
            "Stretch + Relax",
            "Relax muscles & calm mind.",
            vec![
                ex(
                    "Gentle Yoga / Slow Walk",
                    "-",
                    "-",
                    "10 min",
                    "-",
                    "Light movement.",
                ),
                ex(
                    "Meditation / Mindful Breathing",
                    "-",
                    "-",
                    "5 min",
                    "-",
                    "Focus on breath.",
                ),
                ex(
                    "Light Abdomen Massage (optional)",
                    "-",
                    "-",
                    "2–3 min",
                    "-",
                    "Gentle motions.",
                ),
            ],
        ),
        routine(
            Weekly,
            "Sunday",
            "Active Cardio",
            "Boost endorphins, reduce stress.",
            vec![
                ex(
                    "Walking / Zumba / Cycling / Dancing",
                    "-",
                    "-",
                    "20 min",
                    "As needed",
                    "Moderate intensity.",
                ),
                ex("Leg & Back Stretch", "-", "-", "5 min", "-", "Cool down."),
            ],
        ),
    ]
});

static PERIOD_PLAN: LazyLock<Vec<Routine>> = LazyLock::new(|| {
    use RoutineKind::Period;
    vec![
        routine(
            Period,
            "Day 1",
            "Rest & Gentle Flow",
            "Eases first-day cramps, calms body",
            vec![
                hold("Child’s Pose", "3 min", "Relax lower back."),
                hold("Cat–Cow Pose", "1 min", "Massage spine."),
                hold("Deep Belly Breathing", "5 min", "Deep breaths."),
            ],
        ),
        routine(
            Period,
            "Day 2",
            "Gentle Yoga Stretch",
            "Reduces lower-back pain & flow discomfort",
            vec![
                hold("Cat–Cow Pose", "2 min", "Slow movements."),
                hold("Reclined Twist", "1 min each side", "Gentle twist."),
                ex("Bridge Pose", "2", "", "20 sec", "", "Gentle bridge."),
            ],
        ),
        routine(
            Period,
            "Day 3",
            "Relax & Breathe",
            "Relaxes uterus & relieves stress",
            vec![
                hold("Child’s Pose", "2 min", "Restorative."),
                hold("Seated Forward Bend", "2 min", "Stretch hamstrings."),
                hold("Deep Breathing / Meditation", "5 min", "Mental relaxation."),
            ],
        ),
        routine(
            Period,
            "Day 4",
            "Light Movement",
            "Improves blood circulation & eases bloating",
            vec![
                hold("Cat–Cow Pose", "1 min", "Quick flow."),
                ex(
                    "Bridge Pose",
                    "2",
                    "",
                    "20 sec",
                    "",
                    "Gentle strengthening.",
                ),
                ex("Pelvic Tilts", "", "10", "", "", "Improve flow."),
            ],
        ),
        routine(
            Period,
            "Day 5",
            "Restore & Stretch",
            "Final relaxation before energy returns",
            vec![
                hold("Reclined Twist", "1 min each side", "Release tension."),
                hold("Child’s Pose", "2 min", "Final restorative."),
                hold("Butterfly Stretch", "2 min", "Open hips."),
                hold("Deep Breathing", "5 min", "Feel refreshed."),
            ],
        ),
    ]
});

/// The weekly plan, Monday through Sunday.
#[must_use]
pub fn weekly_routines() -> &'static [Routine] {
    &WEEKLY
}

/// The period plan, Day 1 through Day 5.
#[must_use]
pub fn period_routines() -> &'static [Routine] {
    &PERIOD_PLAN
}

/// Every routine, weekly first.
pub fn all_routines() -> impl Iterator<Item = &'static Routine> {
    weekly_routines().iter().chain(period_routines())
}

/// Pick the routine to show today.
///
/// A period day in `1..=5` selects the matching period routine; anything
/// else falls back to the weekly routine for `weekday`.
#[must_use]
pub fn todays_routine(weekday: Weekday, period_day: Option<u8>) -> &'static Routine {
    match period_day {
        Some(day) if (1..=PERIOD_PLAN_DAYS).contains(&day) => {
            &period_routines()[usize::from(day - 1)]
        }
        _ => &weekly_routines()[weekday.num_days_from_monday() as usize],
    }
}

/// Find a routine by its day label, ignoring case and surrounding space.
pub fn find_routine(day: &str) -> Result<&'static Routine, CatalogError> {
    let wanted = day.trim();
    all_routines()
        .find(|r| r.day.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CatalogError::UnknownDay(wanted.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_sizes() {
        assert_eq!(weekly_routines().len(), 7);
        assert_eq!(period_routines().len(), usize::from(PERIOD_PLAN_DAYS));
        assert_eq!(all_routines().count(), 12);
    }

    #[test]
    fn weekday_selection() {
        assert_eq!(todays_routine(Weekday::Mon, None).day, "Monday");
        assert_eq!(todays_routine(Weekday::Sun, None).day, "Sunday");
    }

    #[test]
    fn period_day_overrides_weekday() {
        let routine = todays_routine(Weekday::Wed, Some(2));
        assert_eq!(routine.day, "Day 2");
        assert_eq!(routine.kind, RoutineKind::Period);
    }

    #[test]
    fn out_of_range_period_day_uses_weekday() {
        assert_eq!(todays_routine(Weekday::Fri, Some(0)).day, "Friday");
        assert_eq!(todays_routine(Weekday::Fri, Some(9)).day, "Friday");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_routine(" tuesday ").unwrap().title, "Lower-Body Strength");
        assert_eq!(find_routine("DAY 5").unwrap().kind, RoutineKind::Period);
    }

    #[test]
    fn find_unknown_day() {
        assert_eq!(
            find_routine("Someday"),
            Err(CatalogError::UnknownDay("Someday".to_string()))
        );
    }

    #[test]
    fn contexts_are_unique() {
        let mut contexts: Vec<String> = all_routines().map(Routine::context).collect();
        contexts.sort();
        contexts.dedup();
        assert_eq!(contexts.len(), 12);
    }
}

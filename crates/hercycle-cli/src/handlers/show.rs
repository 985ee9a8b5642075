//! Show command handler.
//!
//! Displays one routine: its exercises, their card ids, the parameters
//! parsed from the raw fields, and the mode each is narrated in.

use anyhow::Result;
use hercycle_core::{ExerciseParams, Routine, card_id, classify, find_routine, media_for};

use crate::error::CliError;
use crate::presentation::{field_or_dash, print_separator, truncate_string};

/// Execute the show command.
pub fn execute(day: &str) -> Result<()> {
    let routine = find_routine(day).map_err(CliError::from)?;
    print_routine(routine);
    Ok(())
}

fn print_routine(routine: &Routine) {
    let context = routine.context();

    println!("{} · {}", routine.day, routine.title);
    println!("Goal: {}\n", routine.goal);
    println!(
        "{:<3} {:<26} {:<6} {:<10} {:<16} {:<10} {:<14} {:<5} Card",
        "#", "Exercise", "Sets", "Reps", "Hold", "Rest", "Mode", "Media"
    );
    print_separator(120);

    for (index, exercise) in routine.exercises.iter().enumerate() {
        let params = ExerciseParams::from_exercise(exercise);
        let mode = if exercise.is_walk() {
            "skipped".to_string()
        } else {
            classify(&exercise.name, params.reps, params.hold_secs).to_string()
        };
        let media = match media_for(&exercise.name) {
            Some(m) if m.gif.is_some() => "gif",
            Some(_) => "img",
            None => "--",
        };

        println!(
            "{:<3} {:<26} {:<6} {:<10} {:<16} {:<10} {:<14} {:<5} {}",
            index,
            truncate_string(&exercise.name, 25),
            field_or_dash(&exercise.sets),
            truncate_string(field_or_dash(&exercise.reps), 9),
            truncate_string(field_or_dash(&exercise.hold), 15),
            truncate_string(field_or_dash(&exercise.rest), 9),
            mode,
            media,
            card_id(index, &context)
        );
    }
}

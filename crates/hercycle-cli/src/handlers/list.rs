//! List command handler.
//!
//! Displays the weekly plan and the period plan in formatted tables.

use anyhow::Result;
use hercycle_core::{Routine, period_routines, weekly_routines};

use crate::presentation::{print_separator, truncate_string};

/// Execute the list command.
pub fn execute() -> Result<()> {
    print_plan("Weekly plan", weekly_routines());
    println!();
    print_plan("Period plan", period_routines());
    println!();
    println!("Use 'hercycle show <day>' to see a routine's exercises.");
    Ok(())
}

fn print_plan(heading: &str, routines: &[Routine]) {
    println!("{heading}:\n");
    println!("{:<10} {:<24} {:<10} Goal", "Day", "Title", "Exercises");
    print_separator(90);

    for routine in routines {
        println!(
            "{:<10} {:<24} {:<10} {}",
            routine.day,
            truncate_string(&routine.title, 23),
            routine.exercises.len(),
            routine.goal
        );
    }
}

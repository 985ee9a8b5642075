//! Log command handler.
//!
//! Loads the user's logs (carrying a running period cycle into today),
//! applies one change and persists it through the log API.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use hercycle_core::{
    DailyLog, LogBook, LogService, WATER_MINIMUM_GLASSES, WATER_TOTAL_GLASSES,
};

use crate::bootstrap::CliContext;
use crate::commands::LogCommand;
use crate::error::CliError;

/// Execute a log subcommand for today.
pub async fn execute(ctx: &CliContext, command: LogCommand) -> Result<()> {
    let service = ctx.log_service()?;
    let today = Local::now().date_naive();

    let mut book = service.load(today).await.map_err(CliError::from)?;
    for line in apply(&service, &mut book, today, command).await? {
        println!("{line}");
    }
    Ok(())
}

/// Apply `command` and return the lines to print.
async fn apply(
    service: &LogService,
    book: &mut LogBook,
    today: NaiveDate,
    command: LogCommand,
) -> Result<Vec<String>, CliError> {
    let lines = match command {
        LogCommand::Water { glass } => {
            let log = service.record_water(book, today, glass).await?;
            let mut lines = vec![format!(
                "💧 {}/{WATER_TOTAL_GLASSES} glasses today",
                log.water
            )];
            if !log.meets_water_minimum() {
                lines.push(format!("   Aim for at least {WATER_MINIMUM_GLASSES}."));
            }
            lines
        }
        LogCommand::Complete => {
            service.complete(book, today).await?;
            vec!["✅ Today's routine marked as completed.".to_string()]
        }
        LogCommand::Period { day } => {
            let touched = service.start_period(book, today, day).await?;
            touched.iter().rev().map(period_line).collect()
        }
        LogCommand::ResetPeriod => {
            let touched = service.reset_period(book, today).await?;
            vec![format!("Cleared {} period day(s).", touched.len())]
        }
        LogCommand::Show { days } => recent(book, days),
    };
    Ok(lines)
}

fn period_line(log: &DailyLog) -> String {
    match log.period_cycle_day {
        Some(day) => format!("🌸 {} · period day {day}", log.date),
        None => format!("{} · no period day", log.date),
    }
}

fn recent(book: &LogBook, days: usize) -> Vec<String> {
    let mut lines = vec![
        format!("{:<12} {:<7} {:<10} Period", "Date", "Water", "Completed"),
        "-".repeat(40),
    ];
    let mut rows: Vec<&DailyLog> = book.iter().collect();
    rows.sort_by_key(|log| std::cmp::Reverse(log.date));

    for log in rows.into_iter().take(days) {
        lines.push(format!(
            "{:<12} {:<7} {:<10} {}",
            log.date.format("%Y-%m-%d"),
            format!("{}/{WATER_TOTAL_GLASSES}", log.water),
            if log.completed { "yes" } else { "no" },
            log.period_cycle_day
                .map_or_else(|| "--".to_string(), |d| d.to_string())
        ));
    }
    lines
}

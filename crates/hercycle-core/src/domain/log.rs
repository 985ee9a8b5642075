//! Daily log records and the rules that mutate them.
//!
//! A [`DailyLog`] is one row of the remote spreadsheet: water glasses,
//! whether the routine was completed, and the period-cycle day (if any).
//! [`LogBook`] keeps the logs of one user keyed by date and applies the
//! period-day bookkeeping; every mutating method returns the logs it
//! touched so the caller can persist exactly those.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glasses shown in the water tracker.
pub const WATER_TOTAL_GLASSES: u8 = 14;

/// Recommended daily minimum.
pub const WATER_MINIMUM_GLASSES: u8 = 6;

/// Number of period-plan days; cycles are carried forward up to this day.
pub const PERIOD_PLAN_DAYS: u8 = 5;

/// One day's log, in the remote API's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub water: u8,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub period_cycle_day: Option<u8>,
}

impl DailyLog {
    /// An empty log for `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            water: 0,
            completed: false,
            period_cycle_day: None,
        }
    }

    /// Apply a tap on water glass `selected` (1-based).
    ///
    /// Tapping the glass that is already the last filled one empties it;
    /// any other tap fills up to and including it.
    pub fn toggle_water(&mut self, selected: u8) {
        let selected = selected.min(WATER_TOTAL_GLASSES);
        self.water = if self.water == selected {
            selected.saturating_sub(1)
        } else {
            selected
        };
    }

    #[must_use]
    pub const fn meets_water_minimum(&self) -> bool {
        self.water >= WATER_MINIMUM_GLASSES
    }
}

/// Errors from log bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    #[error("Period day must be between 1 and {PERIOD_PLAN_DAYS}, got {0}")]
    InvalidPeriodDay(u8),

    #[error("You are not currently in a logged period cycle")]
    NotInCycle,
}

/// All logs of one user, keyed by date.
#[derive(Debug, Clone, Default)]
pub struct LogBook {
    logs: BTreeMap<NaiveDate, DailyLog>,
}

impl LogBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from fetched logs; later duplicates win.
    #[must_use]
    pub fn from_logs(logs: impl IntoIterator<Item = DailyLog>) -> Self {
        Self {
            logs: logs.into_iter().map(|log| (log.date, log)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.logs.get(&date)
    }

    pub fn get_or_create(&mut self, date: NaiveDate) -> &mut DailyLog {
        self.logs.entry(date).or_insert_with(|| DailyLog::new(date))
    }

    /// Logs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DailyLog> {
        self.logs.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Continue a running cycle into `today`.
    ///
    /// If yesterday carries a period day below [`PERIOD_PLAN_DAYS`] and
    /// today has none yet, today becomes yesterday + 1.
    pub fn carry_period_day(&mut self, today: NaiveDate) -> Option<DailyLog> {
        let yesterday_day = today
            .checked_sub_days(Days::new(1))
            .and_then(|d| self.logs.get(&d))
            .and_then(|log| log.period_cycle_day)
            .filter(|day| *day < PERIOD_PLAN_DAYS)?;

        let log = self.get_or_create(today);
        if log.period_cycle_day.is_some() {
            return None;
        }
        log.period_cycle_day = Some(yesterday_day + 1);
        Some(log.clone())
    }

    /// Record that today is period day `day`, back-filling earlier days.
    ///
    /// Marks `today - i` with day `day - i` for every `i` in `0..day`.
    pub fn start_period(&mut self, today: NaiveDate, day: u8) -> Result<Vec<DailyLog>, LogError> {
        if day == 0 || day > PERIOD_PLAN_DAYS {
            return Err(LogError::InvalidPeriodDay(day));
        }

        let mut touched = Vec::with_capacity(usize::from(day));
        for offset in 0..day {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            let log = self.get_or_create(date);
            log.period_cycle_day = Some(day - offset);
            touched.push(log.clone());
        }
        Ok(touched)
    }

    /// Clear the cycle that includes `today`, walking backwards while
    /// consecutive days carry a period day.
    pub fn reset_period_cycle(&mut self, today: NaiveDate) -> Result<Vec<DailyLog>, LogError> {
        let mut touched = Vec::new();
        let mut cursor = Some(today);

        while let Some(date) = cursor {
            match self.logs.get_mut(&date) {
                Some(log) if log.period_cycle_day.is_some() => {
                    log.period_cycle_day = None;
                    touched.push(log.clone());
                }
                _ => break,
            }
            cursor = date.checked_sub_days(Days::new(1));
        }

        if touched.is_empty() {
            return Err(LogError::NotInCycle);
        }
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn toggle_water_fills_and_empties() {
        let mut log = DailyLog::new(date(1));
        log.toggle_water(4);
        assert_eq!(log.water, 4);
        log.toggle_water(4);
        assert_eq!(log.water, 3);
        log.toggle_water(1);
        assert_eq!(log.water, 1);
        log.toggle_water(1);
        assert_eq!(log.water, 0);
    }

    #[test]
    fn toggle_water_caps_at_total() {
        let mut log = DailyLog::new(date(1));
        log.toggle_water(200);
        assert_eq!(log.water, WATER_TOTAL_GLASSES);
    }

    #[test]
    fn water_minimum() {
        let mut log = DailyLog::new(date(1));
        log.water = WATER_MINIMUM_GLASSES - 1;
        assert!(!log.meets_water_minimum());
        log.water = WATER_MINIMUM_GLASSES;
        assert!(log.meets_water_minimum());
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let mut log = DailyLog::new(date(5));
        log.period_cycle_day = Some(2);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["periodCycleDay"], 2);
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn sparse_wire_log_uses_defaults() {
        let log: DailyLog = serde_json::from_str(r#"{"date":"2024-03-05"}"#).unwrap();
        assert_eq!(log, DailyLog::new(date(5)));
    }

    #[test]
    fn carry_advances_running_cycle() {
        let mut book = LogBook::new();
        book.get_or_create(date(9)).period_cycle_day = Some(2);

        let carried = book.carry_period_day(date(10)).unwrap();
        assert_eq!(carried.period_cycle_day, Some(3));
        assert_eq!(book.get(date(10)).unwrap().period_cycle_day, Some(3));
    }

    #[test]
    fn carry_stops_after_last_plan_day() {
        let mut book = LogBook::new();
        book.get_or_create(date(9)).period_cycle_day = Some(PERIOD_PLAN_DAYS);
        assert!(book.carry_period_day(date(10)).is_none());
    }

    #[test]
    fn carry_keeps_existing_day() {
        let mut book = LogBook::new();
        book.get_or_create(date(9)).period_cycle_day = Some(1);
        book.get_or_create(date(10)).period_cycle_day = Some(1);
        assert!(book.carry_period_day(date(10)).is_none());
        assert_eq!(book.get(date(10)).unwrap().period_cycle_day, Some(1));
    }

    #[test]
    fn start_period_backfills() {
        let mut book = LogBook::new();
        let touched = book.start_period(date(10), 3).unwrap();
        assert_eq!(touched.len(), 3);
        assert_eq!(book.get(date(10)).unwrap().period_cycle_day, Some(3));
        assert_eq!(book.get(date(9)).unwrap().period_cycle_day, Some(2));
        assert_eq!(book.get(date(8)).unwrap().period_cycle_day, Some(1));
        assert!(book.get(date(7)).is_none());
    }

    #[test]
    fn start_period_rejects_out_of_range() {
        let mut book = LogBook::new();
        assert_eq!(
            book.start_period(date(10), 0),
            Err(LogError::InvalidPeriodDay(0))
        );
        assert_eq!(
            book.start_period(date(10), 6),
            Err(LogError::InvalidPeriodDay(6))
        );
    }

    #[test]
    fn reset_clears_consecutive_days_only() {
        let mut book = LogBook::new();
        book.get_or_create(date(2)).period_cycle_day = Some(4);
        book.start_period(date(10), 2).unwrap();

        let touched = book.reset_period_cycle(date(10)).unwrap();
        assert_eq!(touched.len(), 2);
        assert!(book.iter().filter(|l| l.date >= date(9)).all(|l| l.period_cycle_day.is_none()));
        assert_eq!(book.get(date(2)).unwrap().period_cycle_day, Some(4));
    }

    #[test]
    fn reset_outside_cycle_fails() {
        let mut book = LogBook::new();
        book.get_or_create(date(10));
        assert_eq!(book.reset_period_cycle(date(10)), Err(LogError::NotInCycle));
    }
}

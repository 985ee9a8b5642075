//! Main commands enum and primary subcommands.

use clap::Subcommand;
use hercycle_core::settings::MAX_PACE;
use hercycle_voice::config::MAX_RATE_FACTOR;

/// Available hercycle commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the weekly and period routines
    List,

    /// Show the exercises of a routine
    Show {
        /// Day label, e.g. "Monday" or "Day 3"
        day: String,
    },

    /// Play a routine with voice guidance (Ctrl-C stops)
    Play {
        /// Day label; defaults to today's routine
        day: Option<String>,

        /// Current period day (1-5); selects the period plan for today
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        period_day: Option<u8>,

        /// Pace multiplier for pauses and counting (0.5 = twice as fast)
        #[arg(long, value_parser = parse_pace)]
        pace: Option<f32>,

        /// Multiplier applied on top of every speech rate
        #[arg(long, default_value_t = 1.0, value_parser = parse_rate)]
        rate: f32,
    },

    /// Record today's daily log
    Log {
        #[command(subcommand)]
        command: LogCommand,
    },

    /// List speech voices
    Voices,
}

/// Daily-log subcommands.
#[derive(Subcommand)]
pub enum LogCommand {
    /// Tap water glass N (tapping the current count again removes one)
    Water {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=14))]
        glass: u8,
    },

    /// Mark today's routine as completed
    Complete,

    /// Record today as period day N, back-filling the earlier days
    Period {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        day: u8,
    },

    /// Clear the period cycle that includes today
    ResetPeriod,

    /// Show recent daily logs
    Show {
        /// Number of days to show
        #[arg(short, long, default_value_t = 7)]
        days: usize,
    },
}

fn parse_pace(value: &str) -> Result<f32, String> {
    parse_multiplier(value, MAX_PACE)
}

fn parse_rate(value: &str) -> Result<f32, String> {
    parse_multiplier(value, MAX_RATE_FACTOR)
}

/// A multiplier in `(0, max]`.
fn parse_multiplier(value: &str, max: f32) -> Result<f32, String> {
    let parsed: f32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if parsed.is_finite() && parsed > 0.0 && parsed <= max {
        Ok(parsed)
    } else {
        Err(format!("must be greater than 0 and at most {max}"))
    }
}

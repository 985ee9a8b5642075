//! Normalisation of the free-text exercise fields.
//!
//! Routine data is authored by hand, so `sets`, `reps`, `hold` and `rest`
//! arrive as strings like `"10 rounds"`, `"~1 min total"`, `"-"` or
//! `"As needed"`. These helpers reduce them to whole numbers. Nothing here
//! fails: anything unparseable collapses to zero.

/// Placeholder used in routine tables for "not applicable".
pub const PLACEHOLDER: &str = "-";

/// Extract the integer embedded in `text`.
///
/// Every non-digit character is stripped and the remaining digits are
/// parsed. Empty input, the `-` placeholder and text without digits all
/// yield `0`, as does a digit run too large for `u32`.
///
/// Note that separate digit groups are concatenated, so `"2–3 min"`
/// becomes `23`.
#[must_use]
pub fn parse_to_number(text: &str) -> u32 {
    if text.is_empty() || text == PLACEHOLDER {
        return 0;
    }

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Parse a duration field into seconds.
///
/// The number is taken from [`parse_to_number`]; if the text mentions
/// minutes (`"min"`, any case) it is multiplied by 60.
#[must_use]
pub fn parse_seconds(text: &str) -> u32 {
    if text.is_empty() || text == PLACEHOLDER {
        return 0;
    }

    let value = parse_to_number(text);
    if text.to_lowercase().contains("min") {
        value.saturating_mul(60)
    } else {
        value
    }
}

//! Table formatting utilities for CLI output.

/// Truncate to at most `max_chars` characters, ending in "..." when cut.
///
/// Counts characters rather than bytes; routine names contain `–` and `’`.
///
/// ```rust
/// use hercycle_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Cobra Pose", 12), "Cobra Pose");
/// assert_eq!(truncate_string("Cat–Cow Pose", 8), "Cat–C...");
/// ```
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Show a raw routine field, with "--" for blank or "-" placeholders.
pub fn field_or_dash(value: &str) -> &str {
    match value.trim() {
        "" | "-" => "--",
        trimmed => trimmed,
    }
}

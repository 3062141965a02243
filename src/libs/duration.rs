//! Study duration text codec.
//!
//! Durations are stored in the sheet as free text in the form
//! `"1 jam 30 menit"` (hours and minutes). This module converts between that
//! text and a structured [`StudyDuration`], and reduces a duration to a
//! fractional hour count for charts.
//!
//! ## Format
//!
//! - 1 hour 30 minutes → `"1 jam 30 menit"`
//! - 2 hours → `"2 jam"`
//! - 45 minutes → `"45 menit"`
//! - zero → `"0 menit"`
//!
//! Parsing is lenient: a numeral followed by `jam` gives the hours and a
//! numeral followed by `menit` gives the minutes. Anything else is ignored and
//! a missing or unreadable component counts as zero. Nothing in here fails.
//!
//! ## Usage
//!
//! ```rust
//! use studylog::libs::duration::{format, parse, to_hours_float};
//!
//! assert_eq!(format(1, 30), "1 jam 30 menit");
//! assert_eq!(parse("45 menit").minutes, 45);
//! assert_eq!(to_hours_float("1 jam 30 menit"), 1.5);
//! ```

use super::messages::Message;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub const HOURS_TOKEN: &str = "jam";
pub const MINUTES_TOKEN: &str = "menit";

/// Upper bound for the hour component of a single session.
pub const MAX_HOURS: u32 = 12;
pub const MAX_MINUTES: u32 = 59;

// ASCII digits only; other Unicode numerals are not durations.
const HOURS_PATTERN: &str = r"(?i)([0-9]+)\s*jam";
const MINUTES_PATTERN: &str = r"(?i)([0-9]+)\s*menit";

static HOURS_RE: OnceLock<Regex> = OnceLock::new();
static MINUTES_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl StudyDuration {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    /// Whether both components sit inside the accepted ranges.
    pub fn in_range(&self) -> bool {
        self.hours <= MAX_HOURS && self.minutes <= MAX_MINUTES
    }

    pub fn as_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }
}

impl fmt::Display for StudyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self.hours, self.minutes))
    }
}

pub fn format(hours: u32, minutes: u32) -> String {
    match (hours > 0, minutes > 0) {
        (true, true) => format!("{} {} {} {}", hours, HOURS_TOKEN, minutes, MINUTES_TOKEN),
        (true, false) => format!("{} {}", hours, HOURS_TOKEN),
        (false, true) => format!("{} {}", minutes, MINUTES_TOKEN),
        (false, false) => format!("0 {}", MINUTES_TOKEN),
    }
}

pub fn parse(text: &str) -> StudyDuration {
    StudyDuration {
        hours: capture_number(hours_re(), text),
        minutes: capture_number(minutes_re(), text),
    }
}

pub fn to_hours_float(text: &str) -> f64 {
    parse(text).as_hours()
}

fn hours_re() -> &'static Regex {
    HOURS_RE.get_or_init(|| token_regex(HOURS_PATTERN))
}

fn minutes_re() -> &'static Regex {
    MINUTES_RE.get_or_init(|| token_regex(MINUTES_PATTERN))
}

fn token_regex(pattern: &'static str) -> Regex {
    Regex::new(pattern).expect(&Message::DurationPatternInvalid(pattern).to_string())
}

// Numerals too large for u32 count as unreadable and fall back to zero.
fn capture_number(re: &Regex, text: &str) -> u32 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_surrounding_text() {
        assert_eq!(parse("sekitar 2 jam lebih 5 menit saja"), StudyDuration::new(2, 5));
        assert_eq!(parse("3jam"), StudyDuration::new(3, 0));
        assert_eq!(parse("10 Menit"), StudyDuration::new(0, 10));
    }

    #[test]
    fn test_parse_ignores_non_ascii_digits() {
        assert_eq!(parse("٣ jam ٤٥ menit"), StudyDuration::new(0, 0));
        assert_eq!(parse("٣ jam 15 menit"), StudyDuration::new(0, 15));
    }

    #[test]
    fn test_parse_overflowing_numeral_is_zero() {
        assert_eq!(parse("99999999999 jam 5 menit"), StudyDuration::new(0, 5));
    }
}

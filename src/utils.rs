use crate::config::{MAX_CUSTOM_SECONDS, MIN_CUSTOM_SECONDS};
use once_cell::sync::Lazy;
use pomodoro_timer::format_clock;
use regex::Regex;
use std::fmt;

// Compiled regexes for duration parsing
static DURATION_MIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m$").unwrap());
static DURATION_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)s$").unwrap());
static DURATION_MIN_SEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)m\s*(\d+)s$").unwrap());
static DURATION_COLON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d{2})$").unwrap());

/// Duration parsing error types
#[derive(Debug, PartialEq, Eq)]
pub enum DurationParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidNumber,
    InvalidSeconds(u32),
    TooShort,
    TooLong(u32),
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationParseError::EmptyInput => write!(f, "Duration cannot be empty"),
            DurationParseError::InvalidFormat(hint) => {
                write!(f, "Invalid duration format. {}", hint)
            }
            DurationParseError::InvalidNumber => write!(f, "Duration is not a valid number"),
            DurationParseError::InvalidSeconds(s) => {
                write!(f, "Invalid seconds: {} (must be 0-59)", s)
            }
            DurationParseError::TooShort => {
                write!(f, "Duration must be at least {} second", MIN_CUSTOM_SECONDS)
            }
            DurationParseError::TooLong(max) => {
                write!(f, "Duration cannot exceed {}", format_clock(*max))
            }
        }
    }
}

impl std::error::Error for DurationParseError {}

/// A validated custom countdown length.
///
/// Displays in canonical `M:SS` form, which [`parse_duration_to_secs`]
/// reads back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomDuration(pub u32);

impl fmt::Display for CustomDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

fn parse_number(digits: &str) -> Result<u32, DurationParseError> {
    digits
        .parse::<u32>()
        .map_err(|_| DurationParseError::InvalidNumber)
}

fn minutes_to_secs(minutes: u32) -> Result<u32, DurationParseError> {
    minutes
        .checked_mul(60)
        .ok_or(DurationParseError::TooLong(MAX_CUSTOM_SECONDS))
}

fn minutes_and_secs(minutes: &str, seconds: &str) -> Result<u32, DurationParseError> {
    let seconds = parse_number(seconds)?;
    if seconds > 59 {
        return Err(DurationParseError::InvalidSeconds(seconds));
    }
    minutes_to_secs(parse_number(minutes)?)?
        .checked_add(seconds)
        .ok_or(DurationParseError::TooLong(MAX_CUSTOM_SECONDS))
}

fn parse_raw_duration(trimmed: &str) -> Result<u32, DurationParseError> {
    // Bare number means minutes
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return minutes_to_secs(parse_number(trimmed)?);
    }

    if let Some(captures) = DURATION_MIN_REGEX.captures(trimmed) {
        return minutes_to_secs(parse_number(&captures[1])?);
    }

    if let Some(captures) = DURATION_SEC_REGEX.captures(trimmed) {
        return parse_number(&captures[1]);
    }

    if let Some(captures) = DURATION_MIN_SEC_REGEX.captures(trimmed) {
        return minutes_and_secs(&captures[1], &captures[2]);
    }

    if let Some(captures) = DURATION_COLON_REGEX.captures(trimmed) {
        return minutes_and_secs(&captures[1], &captures[2]);
    }

    Err(DurationParseError::InvalidFormat(
        "Use: 25, 25m, 1m30s, 90s, or 1:30".to_string(),
    ))
}

/// Parse a user-typed duration into seconds.
///
/// Supported formats:
/// - Pure number: "25" (interpreted as minutes)
/// - Minutes: "25m"
/// - Seconds: "90s"
/// - Minutes and seconds: "1m30s" or "1m 30s"
/// - Colon format: "1:30" (minutes:seconds)
pub fn parse_duration_to_secs(input: &str) -> Result<u32, DurationParseError> {
    let trimmed = input.trim().to_ascii_lowercase();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput);
    }

    let seconds = parse_raw_duration(&trimmed)?;
    if seconds < MIN_CUSTOM_SECONDS {
        return Err(DurationParseError::TooShort);
    }
    if seconds > MAX_CUSTOM_SECONDS {
        return Err(DurationParseError::TooLong(MAX_CUSTOM_SECONDS));
    }
    Ok(seconds)
}

/// Validate the custom duration field.
pub fn validate_custom_duration(input: &str) -> Result<CustomDuration, String> {
    parse_duration_to_secs(input)
        .map(CustomDuration)
        .map_err(|e| e.to_string())
}

/// Browser tab title for the given clock and phase label.
pub fn document_title(app_title: &str, clock: Option<(&str, &str)>) -> String {
    match clock {
        Some((clock, phase)) => format!("{} · {}", clock, phase),
        None => app_title.to_string(),
    }
}

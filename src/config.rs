//! Application-level configuration constants.

// Timer behavior
pub const TICK_INTERVAL_MS: u32 = 1_000;
pub const PRESETS_CSV: &str = include_str!("presets.csv");

// Document
pub const APP_TITLE: &str = "Pomodoro Timer";

// Limits for the custom duration field
pub const MIN_CUSTOM_SECONDS: u32 = 1;
pub const MAX_CUSTOM_SECONDS: u32 = 3 * 60 * 60;
pub const CUSTOM_DURATION_PLACEHOLDER: &str = "25, 25m, 1m30s, 90s or 1:30";

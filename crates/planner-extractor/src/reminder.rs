//! Reminder extraction and the shared time parser

use crate::error::ExtractorError;
use chrono::NaiveTime;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::debug;

// Time patterns, tried in order
static CLOCK_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2}):([0-9]{2})\s*(am|pm)?").expect("Invalid regex")
});
static HOUR_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]{1,2})\s*(am|pm)").expect("Invalid regex"));

/// Parse a time of day out of text, normalised to 24-hour `HH:mm`
///
/// Accepts `H:MM` with an optional am/pm suffix, then a bare hour with a
/// required am/pm suffix. Times that do not exist on a 24-hour clock are
/// rejected.
///
/// ```
/// use planner_extractor::parse_time;
///
/// assert_eq!(parse_time("at 9:30pm").as_deref(), Some("21:30"));
/// assert_eq!(parse_time("12am").as_deref(), Some("00:00"));
/// assert_eq!(parse_time("noon"), None);
/// ```
pub fn parse_time(text: &str) -> Option<String> {
    if let Some(caps) = CLOCK_TIME_PATTERN.captures(text) {
        let hours: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;
        let period = caps.get(3).map(|m| m.as_str().to_lowercase());
        return format_time(to_24_hour(hours, period.as_deref()), minutes);
    }

    if let Some(caps) = HOUR_TIME_PATTERN.captures(text) {
        let hours: u32 = caps[1].parse().ok()?;
        let period = caps[2].to_lowercase();
        return format_time(to_24_hour(hours, Some(&period)), 0);
    }

    None
}

fn to_24_hour(hours: u32, period: Option<&str>) -> u32 {
    match period {
        Some("pm") if hours < 12 => hours + 12,
        Some("am") if hours == 12 => 0,
        _ => hours,
    }
}

fn format_time(hours: u32, minutes: u32) -> Option<String> {
    NaiveTime::from_hms_opt(hours, minutes, 0).map(|t| t.format("%H:%M").to_string())
}

/// Finds a "remind me at <time>" cue
///
/// At most one reminder is produced, from the first reminder phrase.
#[derive(Debug, Clone)]
pub struct ReminderMatcher {
    pattern: Regex,
}

impl ReminderMatcher {
    /// Compile the reminder phrase pattern
    pub fn new() -> Result<Self, ExtractorError> {
        let pattern = RegexBuilder::new(r"remind(?:er)?\s+(?:me|at)\s+([\w\s:]+)")
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Reminder times found in text
    pub fn match_reminders(&self, text: &str) -> Vec<String> {
        let mut reminders = Vec::new();
        if let Some(caps) = self.pattern.captures(text) {
            let cue = &caps[1];
            match parse_time(cue) {
                Some(time) => {
                    debug!("Reminder '{}' -> {}", cue.trim(), time);
                    reminders.push(time);
                }
                None => debug!("Reminder phrase without a time: '{}'", cue.trim()),
            }
        }
        reminders
    }
}

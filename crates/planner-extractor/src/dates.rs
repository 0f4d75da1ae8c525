//! Due date matching
//!
//! Dates are found by walking an ordered rule table. The first rule that
//! yields a real calendar date wins; later mentions are never reconciled.
//!
//! 1. relative day words (`today`, `tomorrow`, `yesterday`)
//! 2. weekday names, resolved to the next occurrence after today
//! 3. `MM/DD/YYYY` (two-digit years are `20yy`)
//! 4. `YYYY-MM-DD`
//! 5. `<Month> <day>[st|nd|rd|th]` in the current year

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use chrono::{Datelike, Days, NaiveDate};
use regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

/// One entry of the date rule table
#[derive(Debug, Clone)]
enum DateRule {
    /// A word meaning today plus a fixed offset
    Relative { pattern: Regex, offset_days: i64 },

    /// Weekday names, Monday first
    Weekday { patterns: Vec<Regex> },

    /// `MM/DD/YY` or `MM/DD/YYYY`
    MonthDayYear { pattern: Regex },

    /// `YYYY-MM-DD`
    YearMonthDay { pattern: Regex },

    /// Month name followed by a day number
    MonthName { pattern: Regex, months: Vec<String> },
}

impl DateRule {
    fn name(&self) -> &'static str {
        match self {
            DateRule::Relative { .. } => "relative",
            DateRule::Weekday { .. } => "weekday",
            DateRule::MonthDayYear { .. } => "month/day/year",
            DateRule::YearMonthDay { .. } => "year-month-day",
            DateRule::MonthName { .. } => "month name",
        }
    }

    fn resolve(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRule::Relative {
                pattern,
                offset_days,
            } => {
                if !pattern.is_match(text) {
                    return None;
                }
                offset(today, *offset_days)
            }
            DateRule::Weekday { patterns } => {
                let index = patterns.iter().position(|p| p.is_match(text))?;
                next_weekday(today, index as i64)
            }
            DateRule::MonthDayYear { pattern } => {
                let caps = pattern.captures(text)?;
                let month = number(&caps, 1)?;
                let day = number(&caps, 2)?;
                let mut year = number(&caps, 3)?;
                if year < 100 {
                    year += 2000;
                }
                NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
            }
            DateRule::YearMonthDay { pattern } => {
                let caps = pattern.captures(text)?;
                let year = number(&caps, 1)?;
                NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, number(&caps, 2)?, number(&caps, 3)?)
            }
            DateRule::MonthName { pattern, months } => {
                let caps = pattern.captures(text)?;
                let name = caps.get(1)?.as_str().to_lowercase();
                let month = months.iter().position(|m| *m == name)? as u32 + 1;
                NaiveDate::from_ymd_opt(today.year(), month, number(&caps, 2)?)
            }
        }
    }
}

/// Finds a single due date referenced in text
#[derive(Debug, Clone)]
pub struct DateMatcher {
    rules: Vec<DateRule>,
}

impl DateMatcher {
    /// Compile the rule table from configured vocabularies
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let mut rules = Vec::new();

        for day in &config.relative_days {
            rules.push(DateRule::Relative {
                pattern: literal(&day.word)?,
                offset_days: day.offset_days,
            });
        }

        let patterns = config
            .weekday_names
            .iter()
            .map(|name| literal(name))
            .collect::<Result<Vec<_>, _>>()?;
        rules.push(DateRule::Weekday { patterns });

        rules.push(DateRule::MonthDayYear {
            pattern: Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{2,4})")?,
        });
        rules.push(DateRule::YearMonthDay {
            pattern: Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})")?,
        });

        let months: Vec<String> = config.month_names.iter().map(|m| m.to_lowercase()).collect();
        let alternation = months
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"({})\s+([0-9]{{1,2}})(?:st|nd|rd|th)?", alternation))
            .case_insensitive(true)
            .build()?;
        rules.push(DateRule::MonthName { pattern, months });

        Ok(Self { rules })
    }

    /// Find the due date in text, relative to `today`
    pub fn match_date(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        for rule in &self.rules {
            if let Some(date) = rule.resolve(text, today) {
                debug!("Due date rule '{}' -> {}", rule.name(), date);
                return Some(date);
            }
        }
        None
    }
}

/// Case-insensitive substring pattern for a vocabulary word
fn literal(word: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn offset(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        today.checked_add_days(Days::new(days as u64))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Next occurrence of a weekday (0 = Monday) strictly after today
fn next_weekday(today: NaiveDate, target: i64) -> Option<NaiveDate> {
    let current = i64::from(today.weekday().num_days_from_monday());
    let mut days = target - current;
    if days <= 0 {
        days += 7;
    }
    offset(today, days)
}

//! Time estimate matching

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Finds an explicit "<n> hours" / "<n> minutes" phrase
#[derive(Debug, Clone)]
pub struct EstimateMatcher {
    pattern: Regex,
    hour_units: Vec<String>,
}

impl EstimateMatcher {
    /// Compile the estimate pattern from configured unit words
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let mut units: Vec<String> = config
            .hour_units
            .iter()
            .chain(&config.minute_units)
            .map(|u| u.to_lowercase())
            .collect();
        // Longest first so "hours" is preferred over "hour"
        units.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = units
            .iter()
            .map(|u| regex::escape(u))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"([0-9]+)\s*({})", alternation))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern,
            hour_units: config.hour_units.iter().map(|u| u.to_lowercase()).collect(),
        })
    }

    /// Estimate in minutes from the first matching phrase
    ///
    /// Only the first phrase is considered. A zero amount, or one that
    /// overflows when converted to minutes, yields no estimate.
    pub fn match_estimate(&self, text: &str) -> Option<u32> {
        let caps = self.pattern.captures(text)?;
        let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
        let unit = caps.get(2)?.as_str().to_lowercase();
        if amount == 0 {
            debug!("Ignoring zero estimate '{}'", caps.get(0)?.as_str());
            return None;
        }

        let minutes = if self.hour_units.contains(&unit) {
            amount.checked_mul(60)?
        } else {
            amount
        };
        debug!("Estimate '{}' -> {} minutes", caps.get(0)?.as_str(), minutes);
        Some(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> EstimateMatcher {
        EstimateMatcher::new(&ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_hours_convert_to_minutes() {
        assert_eq!(matcher().match_estimate("review doc - 2 hours"), Some(120));
        assert_eq!(matcher().match_estimate("1 hour"), Some(60));
        assert_eq!(matcher().match_estimate("3hrs"), Some(180));
        assert_eq!(matcher().match_estimate("4 HR"), Some(240));
    }

    #[test]
    fn test_minutes_pass_through() {
        assert_eq!(matcher().match_estimate("quick note - 15 minutes"), Some(15));
        assert_eq!(matcher().match_estimate("45 mins"), Some(45));
        assert_eq!(matcher().match_estimate("1 minute"), Some(1));
    }

    #[test]
    fn test_first_match_only() {
        assert_eq!(matcher().match_estimate("30 min then 2 hours"), Some(30));
    }

    #[test]
    fn test_no_estimate() {
        assert_eq!(matcher().match_estimate("just a note"), None);
        assert_eq!(matcher().match_estimate("hours of fun"), None);
    }

    #[test]
    fn test_zero_estimate_is_absent() {
        assert_eq!(matcher().match_estimate("review 0 hours"), None);
        assert_eq!(matcher().match_estimate("0 min then 2 hours"), None);
    }

    #[test]
    fn test_overflow_yields_none() {
        assert_eq!(matcher().match_estimate("99999999999 hours"), None);
        assert_eq!(matcher().match_estimate("100000000 hours"), None);
    }
}

//! Priority keyword matching

use crate::config::PriorityKeywords;
use planner_domain::Priority;
use tracing::debug;

/// Infers a priority tier from keyword occurrences
///
/// The tier table is ordered high → medium → low and the first tier with
/// any matching keyword wins. This is a lookup, not a score: several hits in
/// one tier count the same as one.
#[derive(Debug, Clone)]
pub struct PriorityMatcher {
    tiers: Vec<(Priority, Vec<String>)>,
}

impl PriorityMatcher {
    /// Build the tier table from configured keywords
    pub fn new(keywords: &PriorityKeywords) -> Self {
        let lower = |list: &[String]| list.iter().map(|k| k.to_lowercase()).collect();
        Self {
            tiers: vec![
                (Priority::High, lower(&keywords.high)),
                (Priority::Medium, lower(&keywords.medium)),
                (Priority::Low, lower(&keywords.low)),
            ],
        }
    }

    /// Match priority keywords in text, [`Priority::None`] when nothing matches
    pub fn match_priority(&self, text: &str) -> Priority {
        let lower = text.to_lowercase();
        for (priority, keywords) in &self.tiers {
            if let Some(keyword) = keywords.iter().find(|k| lower.contains(k.as_str())) {
                debug!("Priority keyword '{}' -> {}", keyword, priority);
                return *priority;
            }
        }
        Priority::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> PriorityMatcher {
        PriorityMatcher::new(&PriorityKeywords::default())
    }

    #[test]
    fn test_high_keywords() {
        assert_eq!(matcher().match_priority("This is URGENT"), Priority::High);
        assert_eq!(matcher().match_priority("call asap"), Priority::High);
    }

    #[test]
    fn test_medium_keywords() {
        assert_eq!(matcher().match_priority("finish soon"), Priority::Medium);
    }

    #[test]
    fn test_low_keywords() {
        assert_eq!(matcher().match_priority("clean garage eventually"), Priority::Low);
    }

    #[test]
    fn test_high_tier_beats_low_tier() {
        assert_eq!(matcher().match_priority("urgent task"), Priority::High);
    }

    #[test]
    fn test_medium_tier_beats_low_tier() {
        assert_eq!(matcher().match_priority("optional but soon"), Priority::Medium);
    }

    #[test]
    fn test_substring_match() {
        // "tasks" contains the low keyword "task"
        assert_eq!(matcher().match_priority("sort my tasks"), Priority::Low);
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(matcher().match_priority("just a note"), Priority::None);
    }

    #[test]
    fn test_custom_vocabulary() {
        let keywords = PriorityKeywords {
            high: vec!["Now".to_string()],
            medium: vec!["next".to_string()],
            low: vec!["someday".to_string()],
        };
        let matcher = PriorityMatcher::new(&keywords);
        assert_eq!(matcher.match_priority("do it NOW"), Priority::High);
        assert_eq!(matcher.match_priority("urgent"), Priority::None);
    }
}

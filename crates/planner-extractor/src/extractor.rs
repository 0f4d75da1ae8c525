//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::dates::DateMatcher;
use crate::error::ExtractorError;
use crate::estimate::EstimateMatcher;
use crate::priority::PriorityMatcher;
use crate::reminder::ReminderMatcher;
use crate::splitter::split_title;
use crate::types::{ExtractionRequest, ExtractionResult};
use chrono::NaiveDate;
use planner_domain::{Clock, ExtractedTask, SystemClock, TaskStatus};
use tracing::{debug, info};

/// The TaskExtractor turns free text into structured task fields
///
/// All pattern tables are compiled once in [`TaskExtractor::new`] and never
/// mutated, so a single extractor can be shared across threads.
#[derive(Debug, Clone)]
pub struct TaskExtractor<C = SystemClock> {
    priority: PriorityMatcher,
    dates: DateMatcher,
    estimate: EstimateMatcher,
    reminders: ReminderMatcher,
    separators: Vec<char>,
    config: ExtractorConfig,
    clock: C,
}

impl TaskExtractor<SystemClock> {
    /// Create a new TaskExtractor reading "today" from the local clock
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        info!(
            "Building task extractor: {} priority keywords, {} relative day words",
            config.priority_keywords.high.len()
                + config.priority_keywords.medium.len()
                + config.priority_keywords.low.len(),
            config.relative_days.len()
        );

        Ok(Self {
            priority: PriorityMatcher::new(&config.priority_keywords),
            dates: DateMatcher::new(&config)?,
            estimate: EstimateMatcher::new(&config)?,
            reminders: ReminderMatcher::new()?,
            separators: config.title_separators.clone(),
            config,
            clock: SystemClock,
        })
    }
}

impl<C: Clock> TaskExtractor<C> {
    /// Replace the clock used to resolve relative dates
    pub fn with_clock<D: Clock>(self, clock: D) -> TaskExtractor<D> {
        TaskExtractor {
            priority: self.priority,
            dates: self.dates,
            estimate: self.estimate,
            reminders: self.reminders,
            separators: self.separators,
            config: self.config,
            clock,
        }
    }

    /// The configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract task fields, resolving relative dates against the clock
    pub fn extract(&self, text: &str) -> ExtractedTask {
        self.extract_on(text, self.clock.today())
    }

    /// Extract task fields as if today were `today`
    ///
    /// Every matcher sees the whole text, so a date inside the title clause
    /// still sets the due date.
    pub fn extract_on(&self, text: &str, today: NaiveDate) -> ExtractedTask {
        debug!("Extracting task fields from {} chars", text.len());

        let split = split_title(text, &self.separators);

        ExtractedTask {
            title: split.title,
            description: split.description,
            priority: self.priority.match_priority(text),
            due_date: self.dates.match_date(text, today),
            estimate: self.estimate.match_estimate(text),
            reminders: self.reminders.match_reminders(text),
            status: TaskStatus::Pending,
        }
    }

    /// Extract task fields for a request, passing the list id through
    pub fn extract_request(&self, request: ExtractionRequest) -> ExtractionResult {
        ExtractionResult {
            list_id: request.list_id,
            task: self.extract(&request.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_domain::{FixedClock, Priority};

    fn create_test_extractor() -> TaskExtractor<FixedClock> {
        TaskExtractor::new(ExtractorConfig::default())
            .unwrap()
            .with_clock(FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()))
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ExtractorConfig::default();
        config.month_names.clear();
        let result = TaskExtractor::new(config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_extract_uses_clock() {
        let extractor = create_test_extractor();
        let task = extractor.extract("pay rent today");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn test_extract_on_overrides_clock() {
        let extractor = create_test_extractor();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let task = extractor.extract_on("pay rent today", today);
        assert_eq!(task.due_date, Some(today));
    }

    #[test]
    fn test_extract_request_passes_list_id() {
        let extractor = create_test_extractor();
        let result = extractor.extract_request(ExtractionRequest::new("Buy milk").with_list_id(42));
        assert_eq!(result.list_id, Some(42));
        assert_eq!(result.task.title, "Buy milk");
    }

    #[test]
    fn test_extracted_status_is_pending() {
        let extractor = create_test_extractor();
        assert_eq!(extractor.extract("anything").status, TaskStatus::Pending);
    }

    #[test]
    fn test_config_accessor() {
        let extractor = create_test_extractor();
        assert_eq!(extractor.config(), &ExtractorConfig::default());
        assert_eq!(extractor.extract("asap").priority, Priority::High);
    }
}

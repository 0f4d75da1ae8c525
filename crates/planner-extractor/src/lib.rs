//! Planner Extractor
//!
//! Derives structured task fields from the free text a user types into the
//! quick-add box.
//!
//! # Overview
//!
//! Extraction is a single pass of independent heuristics over the same input.
//! Each one is an ordered table of patterns where the first hit wins:
//!
//! ```text
//! text ─┬─ splitter  → title, description
//!       ├─ priority  → None | Low | Medium | High
//!       ├─ dates     → due date
//!       ├─ estimate  → minutes
//!       └─ reminder  → HH:mm
//! ```
//!
//! Nothing here fails at extraction time: a missing cue is an absent field.
//! Relative dates resolve against an injectable [`Clock`](planner_domain::Clock).
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use planner_domain::{FixedClock, Priority};
//! use planner_extractor::{ExtractorConfig, TaskExtractor};
//!
//! # fn example() -> Result<(), planner_extractor::ExtractorError> {
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let extractor = TaskExtractor::new(ExtractorConfig::default())?
//!     .with_clock(FixedClock::new(today));
//!
//! let task = extractor.extract("Finish the report by tomorrow - urgent, should take 2 hours");
//!
//! assert_eq!(task.title, "Finish the report by tomorrow");
//! assert_eq!(task.priority, Priority::High);
//! assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 11));
//! assert_eq!(task.estimate, Some(120));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod dates;
mod error;
mod estimate;
mod extractor;
mod priority;
mod reminder;
mod splitter;
mod types;


pub use config::{ExtractorConfig, PriorityKeywords, RelativeDay};
pub use dates::DateMatcher;
pub use error::ExtractorError;
pub use estimate::EstimateMatcher;
pub use extractor::TaskExtractor;
pub use priority::PriorityMatcher;
pub use reminder::{parse_time, ReminderMatcher};
pub use splitter::{split_title, TitleSplit};
pub use types::{ExtractionRequest, ExtractionResult};

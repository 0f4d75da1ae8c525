//! Planner Domain Layer
//!
//! This crate contains the core domain model for the planner. It defines the
//! value objects and trait interfaces that the extractor, the HTTP service and
//! the CLI all depend upon.
//!
//! ## Key Concepts
//!
//! - **Task**: A persisted unit of work owned by a user, optionally in a list
//! - **ExtractedTask**: The structured fields derived from free text, before
//!   the task has an identity
//! - **Priority**: Four fixed levels (None → Low → Medium → High)
//! - **Clock**: Source of "today" so date-dependent extraction can be frozen
//!
//! ## Architecture
//!
//! - Pure domain types only
//! - Storage and HTTP live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod priority;
pub mod task;
pub mod traits;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use priority::Priority;
pub use task::{ExtractedTask, NewTask, Task, TaskId, TaskStatus};
pub use traits::TaskStore;

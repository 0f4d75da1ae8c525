//! Clock module - where "today" comes from
//!
//! Relative dates ("tomorrow", "friday") are resolved against a [`Clock`].
//! Production code uses the process-local calendar date; tests freeze it.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    /// The current date, without time of day
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the process's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Freeze the clock at the given date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

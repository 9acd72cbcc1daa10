//! Source of "today" for every date rule.
//!
//! Records never call `chrono::Local` directly; they ask their [`Clock`].

use chrono::{Local, NaiveDate};

/// Port for the current calendar date.
///
/// Implemented by:
/// - [`SystemClock`] (production)
/// - [`FixedClock`] (pinned evaluation, tests)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

//! Sources of the current date.
//!
//! Age checks take an explicit `as_of` date. Callers that need "today"
//! obtain it from a [`Clock`], so tests can pin the date with
//! [`FixedClock`].

use std::fmt::Debug;

use chrono::{Local, NaiveDate};

/// Supplies the date calculations are evaluated on.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current date.
    fn today(&self) -> NaiveDate;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that always reports the same date.
///
/// # Example
///
/// ```
/// use benefits_engine::calculation::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

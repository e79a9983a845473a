//! Per-day input specification.
//!
//! A `DaySpec` is the fully-normalized input for one day of rostering:
//! calendar date, demand flag, and the attending workers. The weekday is
//! always derived from the date so the two can never disagree.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;

/// One day of rostering input.
///
/// Immutable once constructed; produced by the request-parsing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySpec {
    /// Calendar date.
    pub date: NaiveDate,
    /// Elevated demand on the heaviest roles.
    #[serde(default)]
    pub big_day: bool,
    /// Workers attending this day.
    pub attendees: Vec<String>,
}

impl DaySpec {
    /// Creates a day spec.
    pub fn new<S: Into<String>>(date: NaiveDate, attendees: Vec<S>) -> Self {
        Self {
            date,
            big_day: false,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a day spec with the rule set's entire roster attending.
    pub fn full_staff(date: NaiveDate, rules: &RuleSet) -> Self {
        Self::new(date, rules.roster.clone())
    }

    /// Marks this day as a big day.
    pub fn with_big_day(mut self, big_day: bool) -> Self {
        self.big_day = big_day;
        self
    }

    /// Weekday, derived from the date.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whether this day is a Monday.
    #[inline]
    pub fn is_monday(&self) -> bool {
        self.weekday() == Weekday::Mon
    }

    /// Number of attendees.
    #[inline]
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

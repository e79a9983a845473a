//! Error taxonomy for the rostering engine.
//!
//! Four failure classes, matching the lifecycle of a rostering request:
//!
//! - [`RosterError::RuleSetParse`]: malformed configuration, fatal at load time.
//! - [`RosterError::InvalidDaySpec`]: malformed per-day input, recoverable by
//!   the caller correcting the request.
//! - [`RosterError::RuleConflict`]: pins and minimum headcounts are mutually
//!   contradictory for a given attendee set. A period run aborts rather than
//!   silently skipping the day.
//! - [`RosterError::InfeasibleDay`]: even the greedy fallback cannot place
//!   every attendee (e.g. an empty day).
//!
//! No error is retried automatically: the search is deterministic, so
//! retrying with unchanged input yields the same outcome.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by rule loading, validation, and solving.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    /// The rule set document is malformed or semantically invalid.
    #[error("rule set parse error: {message}")]
    RuleSetParse {
        /// What was wrong with the document.
        message: String,
    },

    /// A day spec in the request is malformed.
    #[error("invalid day spec at index {index}: {message}")]
    InvalidDaySpec {
        /// Position of the offending day in the request.
        index: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Pins and minimum headcounts cannot both be satisfied.
    #[error("rule conflict: {message}")]
    RuleConflict {
        /// Which rules collided.
        message: String,
    },

    /// No assignment covering every attendee exists.
    #[error("infeasible day {date}: {message}")]
    InfeasibleDay {
        /// The day that could not be solved.
        date: NaiveDate,
        /// Why it was infeasible.
        message: String,
    },
}

impl RosterError {
    /// Creates a rule set parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::RuleSetParse {
            message: message.into(),
        }
    }

    /// Creates a rule conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::RuleConflict {
            message: message.into(),
        }
    }

    /// Creates an invalid day spec error.
    pub fn invalid_day(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidDaySpec {
            index,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = RosterError::parse("unknown role 'F'");
        assert_eq!(e.to_string(), "rule set parse error: unknown role 'F'");

        let e = RosterError::invalid_day(2, "no attendees");
        assert_eq!(e.to_string(), "invalid day spec at index 2: no attendees");

        let e = RosterError::conflict("three workers pinned to C, minimum is 2");
        assert!(e.to_string().starts_with("rule conflict:"));
    }

    #[test]
    fn test_infeasible_day_carries_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let e = RosterError::InfeasibleDay {
            date,
            message: "no attendees".into(),
        };
        assert!(e.to_string().contains("2025-12-01"));
    }
}

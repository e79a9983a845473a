//! Input validation for rostering requests.
//!
//! Checks structural integrity of a horizon's day specs before solving.
//! Detects:
//! - Days with no attendees
//! - Attendees not present in the roster
//! - Duplicate attendees within a day
//!
//! All failures are [`RosterError::InvalidDaySpec`] carrying the index of
//! the offending day, so the caller can correct the request and retry.

use std::collections::HashSet;

use crate::error::RosterError;
use crate::models::DaySpec;
use crate::rules::RuleSet;

/// Validates a horizon of day specs against a rule set.
///
/// Returns on the first problem found, in day order.
pub fn validate_day_specs(days: &[DaySpec], rules: &RuleSet) -> Result<(), RosterError> {
    let roster: HashSet<&str> = rules.roster.iter().map(String::as_str).collect();

    for (index, day) in days.iter().enumerate() {
        if day.attendees.is_empty() {
            return Err(RosterError::invalid_day(index, "no attendees"));
        }

        let mut seen = HashSet::new();
        for worker in &day.attendees {
            if !roster.contains(worker.as_str()) {
                return Err(RosterError::invalid_day(
                    index,
                    format!("unknown worker '{worker}'"),
                ));
            }
            if !seen.insert(worker.as_str()) {
                return Err(RosterError::invalid_day(
                    index,
                    format!("worker '{worker}' listed twice"),
                ));
            }
        }
    }

    Ok(())
}

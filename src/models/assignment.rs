//! Assignment (solution) models.
//!
//! A `DayAssignment` maps every attendee of one day to exactly one role.
//! A `ScheduleRun` is the ordered sequence of solved days for a whole
//! horizon, owned by the period scheduler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Role;

/// A complete worker-to-role mapping for one day.
///
/// Backed by a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayAssignment {
    roles: BTreeMap<String, Role>,
}

impl DayAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a role to a worker, replacing any previous role.
    pub fn assign(&mut self, worker: impl Into<String>, role: Role) {
        self.roles.insert(worker.into(), role);
    }

    /// The role a worker holds, if assigned.
    pub fn role_of(&self, worker: &str) -> Option<Role> {
        self.roles.get(worker).copied()
    }

    /// Whether a worker is assigned.
    pub fn contains(&self, worker: &str) -> bool {
        self.roles.contains_key(worker)
    }

    /// Workers holding a given role, in name order.
    pub fn workers_in(&self, role: Role) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|(_, r)| **r == role)
            .map(|(w, _)| w.as_str())
            .collect()
    }

    /// The multiset of roles actually used, sorted.
    pub fn role_multiset(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.roles.values().copied().collect();
        roles.sort();
        roles
    }

    /// Iterates over (worker, role) pairs in worker-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Role)> {
        self.roles.iter().map(|(w, r)| (w.as_str(), *r))
    }

    /// Number of assigned workers.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no worker is assigned.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// One solved day within a schedule run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDay {
    /// Calendar date.
    pub date: NaiveDate,
    /// Whether the day was flagged as a big day.
    pub big_day: bool,
    /// The chosen assignment.
    pub assignment: DayAssignment,
    /// Score of the chosen assignment.
    pub score: f64,
    /// Whether the greedy fallback produced this day.
    pub degraded: bool,
}

/// The ordered sequence of solved days for a horizon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Solved days, in input order.
    pub days: Vec<ScheduledDay>,
}

impl ScheduleRun {
    /// Creates an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a solved day.
    pub fn push(&mut self, day: ScheduledDay) {
        self.days.push(day);
    }

    /// Finds the assignment for a given date.
    pub fn assignment_for_date(&self, date: NaiveDate) -> Option<&DayAssignment> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| &d.assignment)
    }

    /// Counts how often a worker held a role across the run.
    pub fn role_count(&self, worker: &str, role: Role) -> usize {
        self.days
            .iter()
            .filter(|d| d.assignment.role_of(worker) == Some(role))
            .count()
    }

    /// Number of days solved via the greedy fallback.
    pub fn degraded_count(&self) -> usize {
        self.days.iter().filter(|d| d.degraded).count()
    }

    /// Sum of per-day scores.
    pub fn total_score(&self) -> f64 {
        self.days.iter().map(|d| d.score).sum()
    }

    /// Number of days in the run.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the run is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

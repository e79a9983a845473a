//! Running fairness statistics.
//!
//! Horizon-scoped counters keyed by worker. Created empty at the start of
//! a period run, folded additively after each day is finalized, never
//! decremented. The period scheduler is the sole mutator; the day solver
//! and scoring function only ever read a snapshot.

use std::collections::BTreeMap;

use super::{DayAssignment, DaySpec, Role};
use crate::rules::RuleSet;

/// Per-worker cumulative counters used by the fairness scoring terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FairnessStats {
    role_counts: BTreeMap<String, BTreeMap<Role, u32>>,
    big_day_a: BTreeMap<String, u32>,
    big_day_d: BTreeMap<String, u32>,
    monday_c: BTreeMap<String, u32>,
}

impl FairnessStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// How often a worker has held a role so far.
    pub fn role_count(&self, worker: &str, role: Role) -> u32 {
        self.role_counts
            .get(worker)
            .and_then(|counts| counts.get(&role))
            .copied()
            .unwrap_or(0)
    }

    /// How often a worker has held role A on a big day.
    pub fn big_day_a(&self, worker: &str) -> u32 {
        self.big_day_a.get(worker).copied().unwrap_or(0)
    }

    /// How often a worker has held role D on a big day.
    pub fn big_day_d(&self, worker: &str) -> u32 {
        self.big_day_d.get(worker).copied().unwrap_or(0)
    }

    /// How often a worker has held role C on a Monday.
    ///
    /// Pinned workers are never counted here; see
    /// [`RuleSet::is_monday_c_exempt`].
    pub fn monday_c(&self, worker: &str) -> u32 {
        self.monday_c.get(worker).copied().unwrap_or(0)
    }

    /// Folds one finalized day into the counters.
    pub fn record_day(&mut self, spec: &DaySpec, assignment: &DayAssignment, rules: &RuleSet) {
        for (worker, role) in assignment.iter() {
            *self
                .role_counts
                .entry(worker.to_string())
                .or_default()
                .entry(role)
                .or_insert(0) += 1;

            if spec.big_day && role == Role::A {
                *self.big_day_a.entry(worker.to_string()).or_insert(0) += 1;
            }
            if spec.big_day && role == Role::D {
                *self.big_day_d.entry(worker.to_string()).or_insert(0) += 1;
            }
            if spec.is_monday() && role == Role::C && !rules.is_monday_c_exempt(worker) {
                *self.monday_c.entry(worker.to_string()).or_insert(0) += 1;
            }
        }
    }
}

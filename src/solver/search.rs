//! Single-day assignment search.
//!
//! Exhaustive backtracking over the day's role pool. Pinned attendees are
//! placed first; flexible attendees are then assigned by depth-first
//! search in attendee-list order, trying each distinct remaining pool
//! role at every level. Hard constraints prune branches; every complete
//! assignment is scored against the fairness snapshot and the single best
//! is kept.
//!
//! # Tie-breaking
//!
//! Ties are broken by exploration order: the first complete assignment
//! reaching the maximum score wins. Exploration order is attendee-list
//! order crossed with pool construction order, so the result is fully
//! deterministic.
//!
//! # Degraded results
//!
//! Two situations abandon optimality and fall back to a greedy fill
//! (attendees in order, pool roles in insertion order, role C once the
//! pool runs dry): an exhausted node budget, and a constraint
//! configuration admitting no complete assignment. Both are logged and
//! flagged on the returned [`DayResult`].
//!
//! # Complexity
//!
//! At most `k!` leaves for `k` flexible attendees, cut down by
//! duplicate-role deduplication and constraint pruning. Rosters are small, so
//! exhaustive search stays tractable; the node budget exists for callers
//! who need a hard ceiling anyway.

use tracing::warn;

use super::pool::{build_day_pool, DayPool};
use super::score::score_assignment;
use crate::error::RosterError;
use crate::models::{DayAssignment, DaySpec, FairnessStats, Role};
use crate::rules::RuleSet;

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum placement attempts before the search gives up and the
    /// greedy fallback takes over. 0 = unlimited.
    pub node_budget: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { node_budget: 0 }
    }
}

impl SolverConfig {
    /// Sets the node budget.
    pub fn with_node_budget(mut self, budget: usize) -> Self {
        self.node_budget = budget;
        self
    }
}

/// Outcome of solving one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayResult {
    /// The chosen assignment.
    pub assignment: DayAssignment,
    /// Its score under the fairness snapshot.
    pub score: f64,
    /// Whether the greedy fallback produced it.
    pub degraded: bool,
}

/// Exhaustive single-day solver.
#[derive(Debug, Clone)]
pub struct DaySolver<'a> {
    rules: &'a RuleSet,
    config: SolverConfig,
}

impl<'a> DaySolver<'a> {
    /// Creates a solver for a rule set.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            config: SolverConfig::default(),
        }
    }

    /// Sets the search configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Finds the best assignment for one day.
    ///
    /// `previous` is the prior day's assignment (empty for the first
    /// day); `stats` is a read-only fairness snapshot.
    pub fn solve(
        &self,
        spec: &DaySpec,
        previous: &DayAssignment,
        stats: &FairnessStats,
    ) -> Result<DayResult, RosterError> {
        if spec.attendees.is_empty() {
            return Err(RosterError::InfeasibleDay {
                date: spec.date,
                message: "no attendees".into(),
            });
        }

        let pool = build_day_pool(spec, self.rules)?;

        let mut base = DayAssignment::new();
        for (worker, role) in &pool.pinned {
            base.assign(worker.clone(), *role);
        }

        let flexible: Vec<&str> = spec
            .attendees
            .iter()
            .filter(|w| !self.rules.is_pinned(w))
            .map(String::as_str)
            .collect();

        let mut search = Search {
            spec,
            previous,
            stats,
            rules: self.rules,
            flexible: &flexible,
            budget: self.config.node_budget,
            visited: 0,
            aborted: false,
            best: None,
        };
        let mut remaining = pool.flexible.clone();
        search.explore(0, &mut base, &mut remaining);

        if search.aborted {
            warn!(
                date = %spec.date,
                visited = search.visited,
                budget = self.config.node_budget,
                "node budget exhausted, falling back to greedy fill"
            );
            return Ok(self.greedy(spec, &pool, previous, stats));
        }

        match search.best {
            Some((assignment, score)) => Ok(DayResult {
                assignment,
                score,
                degraded: false,
            }),
            None => {
                warn!(
                    date = %spec.date,
                    "no assignment satisfies the hard constraints, falling back to greedy fill"
                );
                Ok(self.greedy(spec, &pool, previous, stats))
            }
        }
    }

    /// Naive fill: attendees in order take pool roles in insertion
    /// order, defaulting to C when the pool is exhausted. Pins are still
    /// honored; the no-repeat rule is not.
    fn greedy(
        &self,
        spec: &DaySpec,
        pool: &DayPool,
        previous: &DayAssignment,
        stats: &FairnessStats,
    ) -> DayResult {
        let mut assignment = DayAssignment::new();
        for (worker, role) in &pool.pinned {
            assignment.assign(worker.clone(), *role);
        }

        let mut remaining = pool.flexible.clone();
        for worker in &spec.attendees {
            if self.rules.is_pinned(worker) {
                continue;
            }
            let role = if remaining.is_empty() {
                Role::C
            } else {
                remaining.remove(0)
            };
            assignment.assign(worker.clone(), role);
        }

        let score = score_assignment(spec, &assignment, previous, stats, self.rules);
        DayResult {
            assignment,
            score,
            degraded: true,
        }
    }
}

/// Mutable state of one backtracking run.
struct Search<'a> {
    spec: &'a DaySpec,
    previous: &'a DayAssignment,
    stats: &'a FairnessStats,
    rules: &'a RuleSet,
    flexible: &'a [&'a str],
    budget: usize,
    visited: usize,
    aborted: bool,
    best: Option<(DayAssignment, f64)>,
}

impl Search<'_> {
    fn explore(&mut self, depth: usize, current: &mut DayAssignment, remaining: &mut Vec<Role>) {
        if self.aborted {
            return;
        }
        if depth == self.flexible.len() {
            let score =
                score_assignment(self.spec, current, self.previous, self.stats, self.rules);
            // Strictly greater keeps the first-found maximum on ties.
            if self.best.as_ref().is_none_or(|(_, s)| score > *s) {
                self.best = Some((current.clone(), score));
            }
            return;
        }

        let worker = self.flexible[depth];
        let mut tried: Vec<Role> = Vec::with_capacity(remaining.len());

        for index in 0..remaining.len() {
            let role = remaining[index];
            if tried.contains(&role) {
                continue;
            }
            tried.push(role);

            if !self.placement_allowed(worker, role) {
                continue;
            }

            if self.budget != 0 {
                self.visited += 1;
                if self.visited > self.budget {
                    self.aborted = true;
                    return;
                }
            }

            current.assign(worker, role);
            remaining.remove(index);
            self.explore(depth + 1, current, remaining);
            remaining.insert(index, role);

            if self.aborted {
                return;
            }
        }
    }

    fn placement_allowed(&self, worker: &str, role: Role) -> bool {
        // Pin constraint, re-checked defensively; pinned workers are
        // normally placed before the search starts.
        if let Some(pinned) = self.rules.pinned_role(worker) {
            if role != pinned {
                return false;
            }
        }

        // No worker repeats role C on consecutive days unless exempt.
        if role == Role::C
            && self.previous.role_of(worker) == Some(Role::C)
            && !self.rules.is_repeat_c_exempt(worker)
        {
            return false;
        }

        true
    }
}

//! Multi-day period scheduling.
//!
//! Drives the day solver once per day in input order, folding each day's
//! result into the running fairness statistics before the next day is
//! solved. This is a strictly sequential left fold: day `i`'s assignment
//! depends on every day before it and never on days after it, so days
//! cannot be reordered or solved in parallel without breaking the
//! fairness contract.
//!
//! The period scheduler owns the statistics and is their sole mutator;
//! the day solver only ever reads a snapshot.

use tracing::debug;

use super::search::{DaySolver, SolverConfig};
use crate::error::RosterError;
use crate::models::{DayAssignment, DaySpec, FairnessStats, ScheduleRun, ScheduledDay};
use crate::rules::RuleSet;
use crate::validation::validate_day_specs;

/// Sequential multi-day scheduler.
#[derive(Debug, Clone)]
pub struct PeriodScheduler<'a> {
    rules: &'a RuleSet,
    config: SolverConfig,
}

impl<'a> PeriodScheduler<'a> {
    /// Creates a period scheduler for a rule set.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            config: SolverConfig::default(),
        }
    }

    /// Sets the per-day search configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Solves a whole horizon.
    ///
    /// Validates every day spec up front and never partially returns: any
    /// [`RosterError`] aborts the run with no schedule.
    pub fn run(&self, days: &[DaySpec]) -> Result<ScheduleRun, RosterError> {
        validate_day_specs(days, self.rules)?;

        let solver = DaySolver::new(self.rules).with_config(self.config);
        let mut stats = FairnessStats::new();
        let mut previous = DayAssignment::new();
        let mut run = ScheduleRun::new();

        for spec in days {
            let result = solver.solve(spec, &previous, &stats)?;
            debug!(
                date = %spec.date,
                score = result.score,
                degraded = result.degraded,
                "day solved"
            );

            stats.record_day(spec, &result.assignment, self.rules);
            previous = result.assignment.clone();
            run.push(ScheduledDay {
                date: spec.date,
                big_day: spec.big_day,
                assignment: result.assignment,
                score: result.score,
                degraded: result.degraded,
            });
        }

        Ok(run)
    }
}

//! Rostering solvers and fairness metrics.
//!
//! The exhaustive [`DaySolver`] is the reference engine: deterministic,
//! exactly reproducible, and required by the fairness properties the
//! crate guarantees. [`MonteCarloSampler`] is an explicitly approximate
//! alternative for callers who accept best-of-N sampling in exchange for
//! a fixed trial budget. [`PeriodScheduler`] folds either engine's
//! per-day results into a whole-horizon schedule; [`RosterKpi`]
//! summarizes how fair the result came out.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_roster::models::{DaySpec, Role};
//! use u_roster::rules::RuleSet;
//! use u_roster::solver::solve_period;
//!
//! let rules = RuleSet::new(vec!["W1", "W2", "W3", "W4", "W5"])
//!     .with_pin("W1", Role::E);
//! let days = vec![
//!     DaySpec::full_staff(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(), &rules),
//!     DaySpec::full_staff(NaiveDate::from_ymd_opt(2025, 12, 2).unwrap(), &rules),
//! ];
//!
//! let run = solve_period(&days, &rules).unwrap();
//! assert_eq!(run.len(), 2);
//! assert_eq!(run.days[0].assignment.role_of("W1"), Some(Role::E));
//! ```

mod kpi;
mod period;
mod pool;
mod sampler;
mod score;
mod search;

pub use kpi::RosterKpi;
pub use period::PeriodScheduler;
pub use pool::{build_day_pool, DayPool};
pub use sampler::{MonteCarloSampler, SamplerConfig};
pub use score::score_assignment;
pub use search::{DayResult, DaySolver, SolverConfig};

use crate::error::RosterError;
use crate::models::{DayAssignment, DaySpec, FairnessStats, ScheduleRun};
use crate::rules::RuleSet;

/// Solves a single day with the exhaustive solver and default
/// configuration.
///
/// `previous` is the prior day's assignment (empty for the first day of
/// a horizon); `stats` is a read-only snapshot of the fairness counters
/// accumulated over all strictly earlier days.
pub fn solve_day(
    spec: &DaySpec,
    rules: &RuleSet,
    previous: &DayAssignment,
    stats: &FairnessStats,
) -> Result<DayResult, RosterError> {
    DaySolver::new(rules).solve(spec, previous, stats)
}

/// Solves a whole horizon with the exhaustive solver and default
/// configuration.
pub fn solve_period(days: &[DaySpec], rules: &RuleSet) -> Result<ScheduleRun, RosterError> {
    PeriodScheduler::new(rules).run(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::{Days, NaiveDate};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    #[test]
    fn test_solve_day_entry_point() {
        let rules = RuleSet::new(vec!["W1", "W2", "W3", "W4", "W5"]);
        let spec = DaySpec::new(monday(), vec!["W1", "W2", "W3", "W4", "W5"]);
        let result =
            solve_day(&spec, &rules, &DayAssignment::new(), &FairnessStats::new()).unwrap();
        assert_eq!(result.assignment.len(), 5);
    }

    #[test]
    fn test_monday_c_weight_monotonicity() {
        // Raising the Monday-C fairness weight, all else fixed, must not
        // worsen the Monday-C spread over a fixed horizon.
        let roster = vec!["W1", "W2", "W3", "W4", "W5"];
        let mondays: Vec<DaySpec> = (0..4)
            .map(|week| {
                DaySpec::new(
                    monday() + Days::new(7 * week),
                    roster.clone(),
                )
            })
            .collect();

        let spread_with = |monday_c_weight: f64| {
            let rules = RuleSet::new(roster.clone()).with_weights(
                crate::rules::ScoreWeights::default().with_monday_c(monday_c_weight),
            );
            let run = solve_period(&mondays, &rules).unwrap();
            RosterKpi::calculate(&run, &rules).monday_c_spread
        };

        assert!(spread_with(5.0) <= spread_with(0.0));
        assert!(spread_with(50.0) <= spread_with(5.0));
    }

    #[test]
    fn test_run_score_matches_day_results() {
        let rules = RuleSet::new(vec!["W1", "W2", "W3", "W4", "W5", "W6"]);
        let days: Vec<DaySpec> = (0..3)
            .map(|i| DaySpec::full_staff(monday() + Days::new(i), &rules))
            .collect();
        let run = solve_period(&days, &rules).unwrap();
        let total: f64 = run.days.iter().map(|d| d.score).sum();
        assert!((run.total_score() - total).abs() < 1e-10);
    }

    #[test]
    fn test_pool_and_assignment_agree_via_entry_point() {
        let rules = RuleSet::new(vec!["W1", "W2", "W3", "W4", "W5", "W6"]).with_pin("W6", Role::E);
        let spec = DaySpec::full_staff(monday(), &rules);
        let pool = build_day_pool(&spec, &rules).unwrap();
        let result =
            solve_day(&spec, &rules, &DayAssignment::new(), &FairnessStats::new()).unwrap();
        assert_eq!(result.assignment.role_multiset(), pool.role_multiset());
    }
}

//! Fairness quality metrics (KPIs).
//!
//! Computes spread indicators from a completed schedule run. A spread is
//! `max - min` of a per-worker counter across the roster: zero means the
//! counter is perfectly even, larger values mean some workers carry more
//! of the load than others.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Role spread | max-min of per-role counts, per role |
//! | Monday-C spread | max-min of Monday-C counts over unpinned workers |
//! | Big-day A/D spread | max-min of big-day A/D counts |
//! | Degraded days | days produced by the greedy fallback |

use std::collections::BTreeMap;

use crate::models::{DaySpec, FairnessStats, Role, ScheduleRun};
use crate::rules::RuleSet;

/// Fairness indicators for a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterKpi {
    /// Per-role assignment-count spread across the roster.
    pub role_spread: BTreeMap<Role, u32>,
    /// Monday-C count spread across unpinned roster members.
    pub monday_c_spread: u32,
    /// Big-day A count spread across the roster.
    pub big_day_a_spread: u32,
    /// Big-day D count spread across the roster.
    pub big_day_d_spread: u32,
    /// Number of days produced by the greedy fallback.
    pub degraded_days: usize,
}

impl RosterKpi {
    /// Computes KPIs from a completed run.
    ///
    /// Rebuilds the fairness counters by folding the run, so the metrics
    /// match exactly what the solver's scoring terms saw.
    pub fn calculate(run: &ScheduleRun, rules: &RuleSet) -> Self {
        let mut stats = FairnessStats::new();
        for day in &run.days {
            let spec = DaySpec::new(day.date, day.assignment.iter().map(|(w, _)| w).collect())
                .with_big_day(day.big_day);
            stats.record_day(&spec, &day.assignment, rules);
        }

        let mut role_spread = BTreeMap::new();
        for role in Role::ALL {
            let counts = rules.roster.iter().map(|w| stats.role_count(w, role));
            role_spread.insert(role, spread(counts));
        }

        let unpinned = rules
            .roster
            .iter()
            .filter(|w| !rules.is_monday_c_exempt(w));

        Self {
            role_spread,
            monday_c_spread: spread(unpinned.map(|w| stats.monday_c(w))),
            big_day_a_spread: spread(rules.roster.iter().map(|w| stats.big_day_a(w))),
            big_day_d_spread: spread(rules.roster.iter().map(|w| stats.big_day_d(w))),
            degraded_days: run.degraded_count(),
        }
    }
}

fn spread(counts: impl Iterator<Item = u32>) -> u32 {
    let mut min = u32::MAX;
    let mut max = 0u32;
    let mut any = false;
    for c in counts {
        any = true;
        min = min.min(c);
        max = max.max(c);
    }
    if any {
        max - min
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayAssignment, ScheduledDay};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    fn day(d: u32, big: bool, pairs: &[(&str, Role)]) -> ScheduledDay {
        let mut a = DayAssignment::new();
        for (w, r) in pairs {
            a.assign(*w, *r);
        }
        ScheduledDay {
            date: date(d),
            big_day: big,
            assignment: a,
            score: 0.0,
            degraded: false,
        }
    }

    #[test]
    fn test_even_run_has_zero_spread() {
        let rules = RuleSet::new(vec!["W1", "W2"]);
        let mut run = ScheduleRun::new();
        // Dec 1 and Dec 8 are Mondays; each worker takes C once.
        run.push(day(1, false, &[("W1", Role::C), ("W2", Role::A)]));
        run.push(day(8, false, &[("W1", Role::A), ("W2", Role::C)]));

        let kpi = RosterKpi::calculate(&run, &rules);
        assert_eq!(kpi.monday_c_spread, 0);
        assert_eq!(kpi.role_spread[&Role::A], 0);
        assert_eq!(kpi.role_spread[&Role::C], 0);
        assert_eq!(kpi.degraded_days, 0);
    }

    #[test]
    fn test_lopsided_run_has_positive_spread() {
        let rules = RuleSet::new(vec!["W1", "W2"]);
        let mut run = ScheduleRun::new();
        run.push(day(1, true, &[("W1", Role::A), ("W2", Role::C)]));
        run.push(day(8, true, &[("W1", Role::A), ("W2", Role::C)]));

        let kpi = RosterKpi::calculate(&run, &rules);
        assert_eq!(kpi.role_spread[&Role::A], 2);
        assert_eq!(kpi.monday_c_spread, 2);
        assert_eq!(kpi.big_day_a_spread, 2);
    }

    #[test]
    fn test_pinned_workers_excluded_from_monday_c_spread() {
        let rules = RuleSet::new(vec!["W1", "W2", "W3"]).with_pin("W1", Role::C);
        let mut run = ScheduleRun::new();
        run.push(day(
            1,
            false,
            &[("W1", Role::C), ("W2", Role::C), ("W3", Role::A)],
        ));

        let kpi = RosterKpi::calculate(&run, &rules);
        // W1's Monday C does not count; W2 has 1, W3 has 0.
        assert_eq!(kpi.monday_c_spread, 1);
    }

    #[test]
    fn test_degraded_days_counted() {
        let rules = RuleSet::new(vec!["W1"]);
        let mut run = ScheduleRun::new();
        let mut degraded = day(1, false, &[("W1", Role::C)]);
        degraded.degraded = true;
        run.push(degraded);

        let kpi = RosterKpi::calculate(&run, &rules);
        assert_eq!(kpi.degraded_days, 1);
    }
}

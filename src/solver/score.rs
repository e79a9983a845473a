//! Candidate assignment scoring.
//!
//! Pure function over immutable snapshots: a candidate assignment, the
//! previous day's assignment, and the running fairness statistics. Higher
//! is better; the value is unbounded in both directions. Purity is what
//! keeps concurrent leaf evaluation possible without locking.
//!
//! # Terms
//!
//! Per attendee:
//! - role balance: penalizes handing a worker a role they already held
//!   often this horizon
//! - big-day A/D: spreads the heaviest days' hardest roles evenly
//! - Monday-C: spreads the Monday C slot across unpinned workers
//! - fatigue: transition delta from the rule set's fatigue table
//! - synergy: configured worker-role affinity bonuses
//!
//! Per conflicting pair attending together: a flat penalty, plus a larger
//! one when both landed in high-interaction roles.

use crate::models::{DayAssignment, DaySpec, FairnessStats, Role};
use crate::rules::RuleSet;

/// Scores a complete candidate assignment for one day.
pub fn score_assignment(
    spec: &DaySpec,
    candidate: &DayAssignment,
    previous: &DayAssignment,
    stats: &FairnessStats,
    rules: &RuleSet,
) -> f64 {
    let weights = &rules.weights;
    let monday = spec.is_monday();
    let mut score = 0.0;

    for (worker, role) in candidate.iter() {
        score -= weights.role_balance * f64::from(stats.role_count(worker, role));

        if spec.big_day && role == Role::A {
            score -= weights.big_day_a * f64::from(stats.big_day_a(worker));
        }
        if spec.big_day && role == Role::D {
            score -= weights.big_day_d * f64::from(stats.big_day_d(worker));
        }
        if monday && role == Role::C && !rules.is_monday_c_exempt(worker) {
            score -= weights.monday_c * f64::from(stats.monday_c(worker));
        }

        if let Some(prev_role) = previous.role_of(worker) {
            score += rules.fatigue.delta(prev_role, role);
        }

        score += rules.synergy_bonus(worker, role);
    }

    for (a, b) in rules.conflicts_among(candidate) {
        score -= rules.conflict_penalty;
        let both_high_interaction = candidate
            .role_of(a)
            .is_some_and(|r| rules.high_interaction.contains(&r))
            && candidate
                .role_of(b)
                .is_some_and(|r| rules.high_interaction.contains(&r));
        if both_high_interaction {
            score -= rules.high_interaction_penalty;
        }
    }

    score
}

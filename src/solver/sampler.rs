//! Randomized assignment sampler.
//!
//! An explicitly approximate fast path for very large days: instead of
//! exhaustively enumerating role permutations, draw a fixed number of
//! random constraint-respecting assignments and keep the best-scoring
//! one. It converges toward the optimum only statistically and is NOT a
//! substitute for [`DaySolver`](super::DaySolver), whose deterministic
//! best-result contract the testable fairness properties rely on.
//!
//! # Reproducibility
//!
//! The sampler always runs from an explicit seed, so a fixed
//! (seed, trials) pair yields a fixed result.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;

use super::pool::build_day_pool;
use super::score::score_assignment;
use super::search::{DayResult, DaySolver};
use crate::error::RosterError;
use crate::models::{DayAssignment, DaySpec, FairnessStats, Role};
use crate::rules::RuleSet;

/// Sampler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of random assignments to draw.
    pub trials: usize,
    /// RNG seed.
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            seed: 0,
        }
    }
}

impl SamplerConfig {
    /// Sets the trial budget.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Best-of-N random sampler for one day's assignment.
#[derive(Debug, Clone)]
pub struct MonteCarloSampler<'a> {
    rules: &'a RuleSet,
    config: SamplerConfig,
}

impl<'a> MonteCarloSampler<'a> {
    /// Creates a sampler for a rule set.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            config: SamplerConfig::default(),
        }
    }

    /// Sets the sampler configuration.
    pub fn with_config(mut self, config: SamplerConfig) -> Self {
        self.config = config;
        self
    }

    /// Draws random assignments and returns the best one seen.
    ///
    /// Trials that dead-end against the hard constraints are discarded.
    /// If every trial dead-ends, the exhaustive solver takes over, which
    /// applies its own greedy fallback when the day is truly
    /// unsatisfiable.
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
        let flexible: Vec<&str> = spec
            .attendees
            .iter()
            .filter(|w| !self.rules.is_pinned(w))
            .map(String::as_str)
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut best: Option<(DayAssignment, f64)> = None;

        for _ in 0..self.config.trials {
            let Some(candidate) = self.draw(&pool.pinned, &pool.flexible, &flexible, previous, &mut rng)
            else {
                continue;
            };
            let score = score_assignment(spec, &candidate, previous, stats, self.rules);
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((assignment, score)) => Ok(DayResult {
                assignment,
                score,
                degraded: false,
            }),
            None => {
                warn!(
                    date = %spec.date,
                    trials = self.config.trials,
                    "every sampled assignment dead-ended, deferring to the exhaustive solver"
                );
                DaySolver::new(self.rules).solve(spec, previous, stats)
            }
        }
    }

    /// One random constraint-respecting assignment, or `None` on a
    /// dead end.
    fn draw(
        &self,
        pinned: &[(String, Role)],
        pool: &[Role],
        flexible: &[&str],
        previous: &DayAssignment,
        rng: &mut SmallRng,
    ) -> Option<DayAssignment> {
        let mut assignment = DayAssignment::new();
        for (worker, role) in pinned {
            assignment.assign(worker.clone(), *role);
        }

        let mut remaining = pool.to_vec();
        for worker in flexible {
            let legal: Vec<usize> = (0..remaining.len())
                .filter(|&i| self.role_allowed(worker, remaining[i], previous))
                .collect();
            let index = *legal.choose(rng)?;
            assignment.assign(*worker, remaining.remove(index));
        }
        Some(assignment)
    }

    fn role_allowed(&self, worker: &str, role: Role, previous: &DayAssignment) -> bool {
        !(role == Role::C
            && previous.role_of(worker) == Some(Role::C)
            && !self.rules.is_repeat_c_exempt(worker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    fn rules() -> RuleSet {
        RuleSet::new(vec!["W1", "W2", "W3", "W4", "W5"])
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let rules = rules();
        let spec = DaySpec::new(monday(), vec!["W1", "W2", "W3", "W4", "W5"]);
        let sampler =
            MonteCarloSampler::new(&rules).with_config(SamplerConfig::default().with_seed(7));

        let first = sampler
            .solve(&spec, &DayAssignment::new(), &FairnessStats::new())
            .unwrap();
        let second = sampler
            .solve(&spec, &DayAssignment::new(), &FairnessStats::new())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_respects_hard_constraints() {
        let rules = rules().with_pin("W1", Role::C);
        let spec = DaySpec::new(monday(), vec!["W1", "W2", "W3", "W4", "W5"]);
        let mut previous = DayAssignment::new();
        previous.assign("W2", Role::C);

        let result = MonteCarloSampler::new(&rules)
            .with_config(SamplerConfig::default().with_trials(50).with_seed(3))
            .solve(&spec, &previous, &FairnessStats::new())
            .unwrap();

        assert_eq!(result.assignment.role_of("W1"), Some(Role::C));
        assert_ne!(result.assignment.role_of("W2"), Some(Role::C));
        assert_eq!(result.assignment.len(), 5);
    }

    #[test]
    fn test_sampler_never_beats_exhaustive_search() {
        let rules = rules();
        let spec = DaySpec::new(monday(), vec!["W1", "W2", "W3", "W4", "W5"]);
        let mut previous = DayAssignment::new();
        previous.assign("W1", Role::C);

        let exhaustive = DaySolver::new(&rules)
            .solve(&spec, &previous, &FairnessStats::new())
            .unwrap();
        let sampled = MonteCarloSampler::new(&rules)
            .with_config(SamplerConfig::default().with_seed(11))
            .solve(&spec, &previous, &FairnessStats::new())
            .unwrap();

        assert!(sampled.score <= exhaustive.score + 1e-10);
    }

    #[test]
    fn test_empty_day_is_infeasible() {
        let rules = rules();
        let spec = DaySpec::new(monday(), Vec::<String>::new());
        let err = MonteCarloSampler::new(&rules)
            .solve(&spec, &DayAssignment::new(), &FairnessStats::new())
            .unwrap_err();
        assert!(matches!(err, RosterError::InfeasibleDay { .. }));
    }

    #[test]
    fn test_all_dead_ends_degrade_to_greedy() {
        // The only pool role for a lone flexible worker is C, which the
        // no-repeat rule forbids: every trial dead-ends.
        let rules = RuleSet::new(vec!["W1"]);
        let spec = DaySpec::new(monday(), vec!["W1"]);
        let mut previous = DayAssignment::new();
        previous.assign("W1", Role::C);

        let result = MonteCarloSampler::new(&rules)
            .with_config(SamplerConfig::default().with_trials(10).with_seed(5))
            .solve(&spec, &previous, &FairnessStats::new())
            .unwrap();
        assert!(result.degraded);
        assert_eq!(result.assignment.role_of("W1"), Some(Role::C));
    }
}

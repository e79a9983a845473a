//! Daily role rostering engine.
//!
//! Assigns each attending worker, for each day of a multi-day horizon,
//! exactly one role out of a small fixed role set, subject to hard
//! eligibility rules (pins, minimum headcounts, no-repeat constraints)
//! and soft fairness, fatigue, and compatibility preferences. Cumulative
//! statistics carry forward across the horizon, so each day's optimal
//! choice depends on everything scheduled before it.
//!
//! # Modules
//!
//! - **`models`**: domain types - `Role`, `DaySpec`, `DayAssignment`,
//!   `ScheduleRun`, `FatigueMatrix`, `FairnessStats`
//! - **`rules`**: the immutable `RuleSet` configuration and its loading
//! - **`solver`**: the exhaustive day solver, the Monte-Carlo sampler,
//!   the period scheduler, and fairness KPIs
//! - **`validation`**: per-request input integrity checks
//! - **`error`**: the `RosterError` taxonomy
//!
//! # Architecture
//!
//! The engine is the algorithmic core of a rostering service: the HTTP
//! layer, request parsing, and export formatting live elsewhere and call
//! in through [`solver::solve_day`] and [`solver::solve_period`] with
//! fully-normalized inputs. Each day is solved by constraint-pruned
//! exhaustive search over role permutations; a strictly sequential fold
//! threads the fairness statistics from day to day. Results are locally
//! optimal given the fixed past, not globally re-optimized over the
//! horizon.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod rules;
pub mod solver;
pub mod validation;

pub use error::RosterError;
pub use models::{
    DayAssignment, DaySpec, FairnessStats, FatigueMatrix, Role, ScheduleRun, ScheduledDay,
};
pub use rules::{RuleSet, ScoreWeights, SynergyHint};
pub use solver::{solve_day, solve_period, DayResult, DaySolver, PeriodScheduler, SolverConfig};

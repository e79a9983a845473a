//! Rostering domain models.
//!
//! Core data types for daily role rostering: the role enumeration,
//! per-day input specs, assignments, the fatigue transition table, and
//! the running fairness statistics.
//!
//! # Lifecycle
//!
//! `DaySpec` and `RuleSet` are inputs, immutable once constructed.
//! `DayAssignment` is created once per day and never mutated after being
//! folded into `FairnessStats`. `FairnessStats` lives for exactly one
//! period run.

mod assignment;
mod day;
mod fatigue;
mod role;
mod stats;

pub use assignment::{DayAssignment, ScheduleRun, ScheduledDay};
pub use day::DaySpec;
pub use fatigue::{FatigueEntry, FatigueMatrix};
pub use role::Role;
pub use stats::FairnessStats;

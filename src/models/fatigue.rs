//! Fatigue transition table.
//!
//! Maps (yesterday's role, today's role) to a score delta. Positive
//! entries reward a transition, negative entries penalize it. The default
//! table rewards moving off the light role C into the heavier B and A,
//! modeling that a worker who had an easy day can absorb more today.

use serde::{Deserialize, Serialize};

use super::Role;

/// One entry of the fatigue table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueEntry {
    /// Role held on the previous day.
    pub from: Role,
    /// Role under consideration today.
    pub to: Role,
    /// Score delta applied to the candidate assignment.
    pub delta: f64,
}

/// Score deltas keyed by (previous role, next role).
///
/// Transitions without an explicit entry fall back to `default_delta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueMatrix {
    /// Explicit transition deltas. A later entry for the same pair wins.
    entries: Vec<FatigueEntry>,
    /// Delta for transitions with no explicit entry.
    #[serde(default)]
    default_delta: f64,
}

impl Default for FatigueMatrix {
    fn default() -> Self {
        Self::new()
            .with_delta(Role::C, Role::B, 2.5)
            .with_delta(Role::C, Role::A, 1.5)
    }
}

impl FatigueMatrix {
    /// Creates an empty matrix (every transition scores `0.0`).
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            default_delta: 0.0,
        }
    }

    /// Sets the delta for transitions with no explicit entry.
    pub fn with_default_delta(mut self, delta: f64) -> Self {
        self.default_delta = delta;
        self
    }

    /// Defines the delta for one transition.
    pub fn with_delta(mut self, from: Role, to: Role, delta: f64) -> Self {
        self.set_delta(from, to, delta);
        self
    }

    /// Defines the delta for one transition.
    pub fn set_delta(&mut self, from: Role, to: Role, delta: f64) {
        self.entries.push(FatigueEntry { from, to, delta });
    }

    /// Looks up the delta for a transition.
    pub fn delta(&self, from: Role, to: Role) -> f64 {
        self.entries
            .iter()
            .rev()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.delta)
            .unwrap_or(self.default_delta)
    }

    /// Number of explicit entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

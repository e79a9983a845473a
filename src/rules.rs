//! Rule set configuration.
//!
//! The rule set is the immutable configuration for a rostering engine
//! instance: the known roster, hard rules (fixed pins, minimum per-role
//! headcounts, no-repeat exemptions) and soft rules (fatigue table,
//! conflict pairs, high-interaction roles, synergy hints, scoring
//! weights). It is loaded once at process start, validated eagerly, and
//! passed by reference into every solver call. Nothing in this module
//! mutates a rule set after construction.
//!
//! # Loading
//!
//! ```
//! use u_roster::rules::RuleSet;
//!
//! let rules = RuleSet::from_json(r#"{
//!     "roster": ["W1", "W2", "W3", "W4", "W5"],
//!     "pins": { "W1": "E" },
//!     "conflicts": [["W2", "W3"]]
//! }"#).unwrap();
//! assert_eq!(rules.roster.len(), 5);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::RosterError;
use crate::models::{DayAssignment, FatigueMatrix, Role};

/// Weights for the soft scoring terms.
///
/// Exposed as tunable configuration so operators can retune fairness
/// emphasis without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Penalty per prior assignment of the same role to the same worker.
    pub role_balance: f64,
    /// Penalty per prior big-day A assignment, applied on big days.
    pub big_day_a: f64,
    /// Penalty per prior big-day D assignment, applied on big days.
    pub big_day_d: f64,
    /// Penalty per prior Monday-C assignment, applied on Mondays.
    pub monday_c: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            role_balance: 0.5,
            big_day_a: 3.5,
            big_day_d: 3.0,
            monday_c: 5.0,
        }
    }
}

impl ScoreWeights {
    /// Sets the role-balance weight.
    pub fn with_role_balance(mut self, w: f64) -> Self {
        self.role_balance = w;
        self
    }

    /// Sets the big-day A weight.
    pub fn with_big_day_a(mut self, w: f64) -> Self {
        self.big_day_a = w;
        self
    }

    /// Sets the big-day D weight.
    pub fn with_big_day_d(mut self, w: f64) -> Self {
        self.big_day_d = w;
        self
    }

    /// Sets the Monday-C weight.
    pub fn with_monday_c(mut self, w: f64) -> Self {
        self.monday_c = w;
        self
    }
}

/// A soft worker-role affinity bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyHint {
    /// Worker the hint applies to.
    pub worker: String,
    /// Role the worker synergizes with.
    pub role: Role,
    /// Score bonus added when the worker holds the role.
    pub bonus: f64,
}

/// Immutable rostering configuration.
///
/// See the module docs for the loading contract. All fields are optional
/// in the JSON document except `roster`; defaults reproduce the standard
/// five-role shop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// All known workers.
    pub roster: Vec<String>,

    /// Fixed single-role pins: whenever the worker attends, they receive
    /// exactly this role.
    #[serde(default)]
    pub pins: BTreeMap<String, Role>,

    /// Minimum per-role headcounts, the floor of every day's role pool.
    #[serde(default = "default_minimums")]
    pub minimums: BTreeMap<Role, u32>,

    /// Round-robin priority for distributing surplus pool slots.
    #[serde(default = "default_surplus_priority")]
    pub surplus_priority: Vec<Role>,

    /// Workers exempt from the no-repeat-C rule in addition to workers
    /// pinned to C.
    #[serde(default)]
    pub repeat_exempt: Vec<String>,

    /// Fatigue transition table.
    #[serde(default)]
    pub fatigue: FatigueMatrix,

    /// Unordered pairs of workers who should not share a day.
    #[serde(default)]
    pub conflicts: Vec<(String, String)>,

    /// Penalty applied once per conflicting pair attending the same day.
    #[serde(default = "default_conflict_penalty")]
    pub conflict_penalty: f64,

    /// Roles requiring close coordination.
    #[serde(default = "default_high_interaction")]
    pub high_interaction: BTreeSet<Role>,

    /// Extra penalty when a conflicting pair both land in
    /// high-interaction roles.
    #[serde(default = "default_high_interaction_penalty")]
    pub high_interaction_penalty: f64,

    /// Soft worker-role affinity bonuses.
    #[serde(default)]
    pub synergy: Vec<SynergyHint>,

    /// Soft scoring weights.
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_minimums() -> BTreeMap<Role, u32> {
    BTreeMap::from([(Role::A, 1), (Role::B, 1), (Role::C, 2), (Role::D, 1)])
}

fn default_surplus_priority() -> Vec<Role> {
    vec![Role::B, Role::D, Role::C]
}

fn default_conflict_penalty() -> f64 {
    4.0
}

fn default_high_interaction() -> BTreeSet<Role> {
    BTreeSet::from([Role::A, Role::B])
}

fn default_high_interaction_penalty() -> f64 {
    6.0
}

impl RuleSet {
    /// Creates a rule set with the given roster and default rules.
    pub fn new<S: Into<String>>(roster: Vec<S>) -> Self {
        Self {
            roster: roster.into_iter().map(Into::into).collect(),
            pins: BTreeMap::new(),
            minimums: default_minimums(),
            surplus_priority: default_surplus_priority(),
            repeat_exempt: Vec::new(),
            fatigue: FatigueMatrix::default(),
            conflicts: Vec::new(),
            conflict_penalty: default_conflict_penalty(),
            high_interaction: default_high_interaction(),
            high_interaction_penalty: default_high_interaction_penalty(),
            synergy: Vec::new(),
            weights: ScoreWeights::default(),
        }
    }

    /// Pins a worker to a role.
    pub fn with_pin(mut self, worker: impl Into<String>, role: Role) -> Self {
        self.pins.insert(worker.into(), role);
        self
    }

    /// Replaces the minimum headcount table.
    pub fn with_minimums(mut self, minimums: BTreeMap<Role, u32>) -> Self {
        self.minimums = minimums;
        self
    }

    /// Adds a conflicting pair.
    pub fn with_conflict(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.conflicts.push((a.into(), b.into()));
        self
    }

    /// Replaces the fatigue table.
    pub fn with_fatigue(mut self, fatigue: FatigueMatrix) -> Self {
        self.fatigue = fatigue;
        self
    }

    /// Replaces the scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Adds a worker to the no-repeat-C exemption list.
    pub fn with_repeat_exempt(mut self, worker: impl Into<String>) -> Self {
        self.repeat_exempt.push(worker.into());
        self
    }

    /// Adds a synergy hint.
    pub fn with_synergy(mut self, worker: impl Into<String>, role: Role, bonus: f64) -> Self {
        self.synergy.push(SynergyHint {
            worker: worker.into(),
            role,
            bonus,
        });
        self
    }

    /// Parses and validates a rule set from a JSON document.
    ///
    /// Fails fast with [`RosterError::RuleSetParse`] on any schema or
    /// semantic problem, so misconfiguration never surfaces later as a
    /// spurious `RuleConflict`.
    pub fn from_json(document: &str) -> Result<Self, RosterError> {
        let rules: RuleSet =
            serde_json::from_str(document).map_err(|e| RosterError::parse(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Validates semantic consistency of the rule set.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.roster.is_empty() {
            return Err(RosterError::parse("roster must not be empty"));
        }
        let mut seen = BTreeSet::new();
        for worker in &self.roster {
            if !seen.insert(worker.as_str()) {
                return Err(RosterError::parse(format!(
                    "duplicate roster entry '{worker}'"
                )));
            }
        }

        for worker in self.pins.keys() {
            if !seen.contains(worker.as_str()) {
                return Err(RosterError::parse(format!(
                    "pin references unknown worker '{worker}'"
                )));
            }
        }
        for worker in &self.repeat_exempt {
            if !seen.contains(worker.as_str()) {
                return Err(RosterError::parse(format!(
                    "repeat exemption references unknown worker '{worker}'"
                )));
            }
        }
        for (a, b) in &self.conflicts {
            if a == b {
                return Err(RosterError::parse(format!(
                    "worker '{a}' cannot conflict with themselves"
                )));
            }
            for worker in [a, b] {
                if !seen.contains(worker.as_str()) {
                    return Err(RosterError::parse(format!(
                        "conflict pair references unknown worker '{worker}'"
                    )));
                }
            }
        }
        for hint in &self.synergy {
            if !seen.contains(hint.worker.as_str()) {
                return Err(RosterError::parse(format!(
                    "synergy hint references unknown worker '{}'",
                    hint.worker
                )));
            }
        }

        if self.surplus_priority.is_empty() {
            return Err(RosterError::parse("surplus priority must not be empty"));
        }
        let mut surplus_seen = BTreeSet::new();
        for role in &self.surplus_priority {
            if !surplus_seen.insert(role) {
                return Err(RosterError::parse(format!(
                    "duplicate surplus priority entry '{role}'"
                )));
            }
        }

        if self.conflict_penalty < 0.0 || self.high_interaction_penalty < 0.0 {
            return Err(RosterError::parse("penalties must be non-negative"));
        }

        Ok(())
    }

    /// The role a worker is pinned to, if any.
    pub fn pinned_role(&self, worker: &str) -> Option<Role> {
        self.pins.get(worker).copied()
    }

    /// Whether a worker has a fixed-role pin.
    pub fn is_pinned(&self, worker: &str) -> bool {
        self.pins.contains_key(worker)
    }

    /// Whether a worker may hold role C on consecutive days.
    ///
    /// Workers pinned to C are always exempt; `repeat_exempt` adds more.
    pub fn is_repeat_c_exempt(&self, worker: &str) -> bool {
        self.pinned_role(worker) == Some(Role::C)
            || self.repeat_exempt.iter().any(|w| w == worker)
    }

    /// Whether a worker is excluded from Monday-C fairness accounting.
    ///
    /// All pinned workers are excluded: their role is not the solver's
    /// choice, so counting them would skew the spread.
    pub fn is_monday_c_exempt(&self, worker: &str) -> bool {
        self.is_pinned(worker)
    }

    /// Whether two workers are configured as a conflicting pair.
    pub fn are_conflicting(&self, a: &str, b: &str) -> bool {
        self.conflicts
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// Configured conflict pairs where both members are assigned today.
    pub fn conflicts_among<'a>(
        &'a self,
        assignment: &'a DayAssignment,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.conflicts
            .iter()
            .filter(|(a, b)| assignment.contains(a) && assignment.contains(b))
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Total synergy bonus for a worker holding a role.
    pub fn synergy_bonus(&self, worker: &str, role: Role) -> f64 {
        self.synergy
            .iter()
            .filter(|h| h.worker == worker && h.role == role)
            .map(|h| h.bonus)
            .sum()
    }
}

//! Role pool construction.
//!
//! Given a day's attendees and the rule set, produces the multiset of
//! role slots that must be filled that day. Deterministic and pure: the
//! same inputs always yield the same pool.
//!
//! # Algorithm
//!
//! 1. Partition attendees into pinned and flexible.
//! 2. Start from the configured per-role minimums. Each pinned attendee
//!    whose role carries a minimum consumes one slot of it; driving a
//!    minimum below zero is a `RuleConflict`. A pin to a role with no
//!    configured minimum occupies a dedicated slot outside the flexible
//!    pool.
//! 3. If the remaining minimums exceed the flexible headcount, fall back
//!    to a reduced hard-coded pool (1-4 attendees) anchored on role C.
//!    Otherwise top the pool up to the flexible headcount, round-robin
//!    over the surplus priority list.

use crate::error::RosterError;
use crate::models::{DaySpec, Role};
use crate::rules::RuleSet;

/// The role slots for one day, split by how they are filled.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPool {
    /// Pinned attendees with their fixed roles, in attendee order.
    pub pinned: Vec<(String, Role)>,
    /// Role slots available to flexible attendees, in construction order.
    pub flexible: Vec<Role>,
}

impl DayPool {
    /// The full role multiset for the day (pinned + flexible), sorted.
    pub fn role_multiset(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .pinned
            .iter()
            .map(|(_, r)| *r)
            .chain(self.flexible.iter().copied())
            .collect();
        roles.sort();
        roles
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.pinned.len() + self.flexible.len()
    }

    /// Whether the pool has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reduced pools for pathologically small flexible headcounts.
///
/// Role C is the anchor: it is present from one attendee up.
fn reduced_pool(flexible_count: usize) -> Vec<Role> {
    match flexible_count {
        0 => vec![],
        1 => vec![Role::C],
        2 => vec![Role::A, Role::C],
        3 => vec![Role::A, Role::B, Role::C],
        _ => vec![Role::A, Role::B, Role::C, Role::D],
    }
}

/// Builds the role pool for one day.
///
/// Fails with [`RosterError::RuleConflict`] when pins and minimums are
/// mutually contradictory for the attendee set.
pub fn build_day_pool(spec: &DaySpec, rules: &RuleSet) -> Result<DayPool, RosterError> {
    let mut pinned = Vec::new();
    let mut flexible_count = 0usize;
    for worker in &spec.attendees {
        match rules.pinned_role(worker) {
            Some(role) => pinned.push((worker.clone(), role)),
            None => flexible_count += 1,
        }
    }

    // Pinned attendees consume their role's minimum slot where one exists.
    let mut minimums = rules.minimums.clone();
    for (worker, role) in &pinned {
        if let Some(floor) = minimums.get_mut(role) {
            if *floor == 0 {
                return Err(RosterError::conflict(format!(
                    "pin '{worker}' -> {role} exceeds the minimum headcount for {role}"
                )));
            }
            *floor -= 1;
        }
    }

    let min_total: u32 = minimums.values().sum();
    let flexible = if min_total as usize > flexible_count {
        if flexible_count > 4 {
            return Err(RosterError::conflict(format!(
                "minimum headcounts need {min_total} workers but only {flexible_count} are flexible"
            )));
        }
        reduced_pool(flexible_count)
    } else {
        let mut pool: Vec<Role> = Vec::with_capacity(flexible_count);
        for (role, count) in &minimums {
            for _ in 0..*count {
                pool.push(*role);
            }
        }
        let mut next = 0usize;
        while pool.len() < flexible_count {
            pool.push(rules.surplus_priority[next % rules.surplus_priority.len()]);
            next += 1;
        }
        pool
    };

    Ok(DayPool { pinned, flexible })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    fn spec(attendees: Vec<&str>) -> DaySpec {
        DaySpec::new(date(), attendees)
    }

    fn rules(n: usize) -> RuleSet {
        RuleSet::new((1..=n).map(|i| format!("W{i}")).collect())
    }

    #[test]
    fn test_five_flexible_get_base_pool() {
        let pool = build_day_pool(&spec(vec!["W1", "W2", "W3", "W4", "W5"]), &rules(5)).unwrap();
        assert!(pool.pinned.is_empty());
        assert_eq!(
            pool.role_multiset(),
            vec![Role::A, Role::B, Role::C, Role::C, Role::D]
        );
    }

    #[test]
    fn test_surplus_round_robin() {
        // 8 flexible: base A B C C D plus surplus B, D, C
        let pool = build_day_pool(
            &spec(vec!["W1", "W2", "W3", "W4", "W5", "W6", "W7", "W8"]),
            &rules(8),
        )
        .unwrap();
        assert_eq!(
            pool.role_multiset(),
            vec![
                Role::A,
                Role::B,
                Role::B,
                Role::C,
                Role::C,
                Role::C,
                Role::D,
                Role::D
            ]
        );
    }

    #[test]
    fn test_surplus_wraps_around_priority_list() {
        // 11 flexible: base (5) plus surplus B D C B D C
        let attendees: Vec<String> = (1..=11).map(|i| format!("W{i}")).collect();
        let pool = build_day_pool(
            &spec(attendees.iter().map(String::as_str).collect()),
            &rules(11),
        )
        .unwrap();
        let multiset = pool.role_multiset();
        assert_eq!(multiset.iter().filter(|r| **r == Role::B).count(), 3);
        assert_eq!(multiset.iter().filter(|r| **r == Role::D).count(), 3);
        assert_eq!(multiset.iter().filter(|r| **r == Role::C).count(), 4);
    }

    #[test]
    fn test_pin_consumes_minimum_slot() {
        let rules = rules(5).with_pin("W2", Role::C);
        let pool = build_day_pool(&spec(vec!["W1", "W2", "W3", "W4", "W5"]), &rules).unwrap();
        assert_eq!(pool.pinned, vec![("W2".to_string(), Role::C)]);
        // One C consumed by the pin; the flexible pool keeps the other.
        assert_eq!(
            pool.flexible,
            vec![Role::A, Role::B, Role::C, Role::D]
        );
        assert_eq!(
            pool.role_multiset(),
            vec![Role::A, Role::B, Role::C, Role::C, Role::D]
        );
    }

    #[test]
    fn test_pin_outside_minimums_gets_dedicated_slot() {
        let rules = rules(6).with_pin("W6", Role::E);
        let pool = build_day_pool(
            &spec(vec!["W1", "W2", "W3", "W4", "W5", "W6"]),
            &rules,
        )
        .unwrap();
        assert_eq!(
            pool.role_multiset(),
            vec![Role::A, Role::B, Role::C, Role::C, Role::D, Role::E]
        );
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_over_pinned_role_is_a_conflict() {
        // Minimum C is 2; a third C pin cannot be satisfied.
        let rules = rules(6)
            .with_pin("W1", Role::C)
            .with_pin("W2", Role::C)
            .with_pin("W3", Role::C);
        let err = build_day_pool(
            &spec(vec!["W1", "W2", "W3", "W4", "W5", "W6"]),
            &rules,
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::RuleConflict { .. }));
    }

    #[test]
    fn test_reduced_pools() {
        assert_eq!(
            build_day_pool(&spec(vec!["W1"]), &rules(1)).unwrap().flexible,
            vec![Role::C]
        );
        assert_eq!(
            build_day_pool(&spec(vec!["W1", "W2"]), &rules(2))
                .unwrap()
                .flexible,
            vec![Role::A, Role::C]
        );
        assert_eq!(
            build_day_pool(&spec(vec!["W1", "W2", "W3"]), &rules(3))
                .unwrap()
                .flexible,
            vec![Role::A, Role::B, Role::C]
        );
        assert_eq!(
            build_day_pool(&spec(vec!["W1", "W2", "W3", "W4"]), &rules(4))
                .unwrap()
                .flexible,
            vec![Role::A, Role::B, Role::C, Role::D]
        );
    }

    #[test]
    fn test_reduced_pool_with_pinned_worker() {
        // Five attendees, one pinned to E: four flexible fall back to the
        // reduced pool.
        let rules = rules(5).with_pin("W1", Role::E);
        let pool = build_day_pool(&spec(vec!["W1", "W2", "W3", "W4", "W5"]), &rules).unwrap();
        assert_eq!(pool.flexible, vec![Role::A, Role::B, Role::C, Role::D]);
        assert_eq!(
            pool.role_multiset(),
            vec![Role::A, Role::B, Role::C, Role::D, Role::E]
        );
    }

    #[test]
    fn test_oversized_minimums_conflict_for_large_days() {
        use std::collections::BTreeMap;
        let rules = rules(6).with_minimums(BTreeMap::from([
            (Role::A, 4),
            (Role::B, 4),
        ]));
        let err = build_day_pool(
            &spec(vec!["W1", "W2", "W3", "W4", "W5", "W6"]),
            &rules,
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::RuleConflict { .. }));
    }

    #[test]
    fn test_pool_is_deterministic() {
        let rules = rules(7).with_pin("W3", Role::E);
        let spec = spec(vec!["W1", "W2", "W3", "W4", "W5", "W6", "W7"]);
        let first = build_day_pool(&spec, &rules).unwrap();
        let second = build_day_pool(&spec, &rules).unwrap();
        assert_eq!(first, second);
    }
}

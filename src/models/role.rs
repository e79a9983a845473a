//! The closed role enumeration.
//!
//! Five daily duty roles, A through E. The engine treats them as an
//! unordered set; which roles are "heavy" or "high-interaction" is
//! configured in the rule set, not encoded here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A daily duty role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    A,
    B,
    C,
    D,
    E,
}

impl Role {
    /// All roles, in canonical order.
    pub const ALL: [Role; 5] = [Role::A, Role::B, Role::C, Role::D, Role::E];

    /// Single-letter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::A => "A",
            Role::B => "B",
            Role::C => "C",
            Role::D => "D",
            Role::E => "E",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Role::A),
            "B" => Ok(Role::B),
            "C" => Ok(Role::C),
            "D" => Ok(Role::D),
            "E" => Ok(Role::E),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

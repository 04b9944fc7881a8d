//! Length admissibility policies
//!
//! Two rules for rejecting words by length have been used over time:
//! - tile budget: a word may not be longer than the letters available
//!   (`tiles + constraints`, or an explicit maximum)
//! - constraint reach: a word may not be shorter than its furthest
//!   constrained slot
//!
//! The tile budget is the default. Either rule, or both, can be selected.

use std::fmt;
use std::str::FromStr;

/// Which length rule the matcher applies before checking letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Reject words longer than the letter budget (default)
    #[default]
    TileBudget,
    /// Reject words shorter than the furthest constrained position
    ConstraintReach,
    /// Apply both rules
    Both,
}

impl LengthPolicy {
    /// Create a policy from its name
    ///
    /// Supported names: "budget", "reach", "both" (plus long forms
    /// "tile-budget" and "constraint-reach").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "budget" | "tile-budget" => Some(Self::TileBudget),
            "reach" | "constraint-reach" => Some(Self::ConstraintReach),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Short name as accepted by `from_name`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TileBudget => "budget",
            Self::ConstraintReach => "reach",
            Self::Both => "both",
        }
    }

    /// Whether a word of `len` characters passes this policy
    ///
    /// `budget` is the maximum playable length, `reach` the furthest
    /// constrained position (0 without constraints).
    #[inline]
    #[must_use]
    pub const fn admits(self, len: usize, budget: usize, reach: usize) -> bool {
        match self {
            Self::TileBudget => len <= budget,
            Self::ConstraintReach => len >= reach,
            Self::Both => len <= budget && len >= reach,
        }
    }
}

impl fmt::Display for LengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("unknown length policy '{s}' (expected budget, reach or both)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_tile_budget() {
        assert_eq!(LengthPolicy::default(), LengthPolicy::TileBudget);
    }

    #[test]
    fn from_name_round_trips_names() {
        for policy in [
            LengthPolicy::TileBudget,
            LengthPolicy::ConstraintReach,
            LengthPolicy::Both,
        ] {
            assert_eq!(LengthPolicy::from_name(policy.name()), Some(policy));
        }
        assert_eq!(
            LengthPolicy::from_name("Tile-Budget"),
            Some(LengthPolicy::TileBudget)
        );
        assert_eq!(LengthPolicy::from_name("longest"), None);
    }

    #[test]
    fn from_str_reports_unknown_names() {
        let err = "nope".parse::<LengthPolicy>().unwrap_err();
        assert!(err.contains("nope"));
    }

    #[test]
    fn tile_budget_rejects_long_words() {
        let policy = LengthPolicy::TileBudget;
        assert!(policy.admits(4, 4, 0));
        assert!(!policy.admits(5, 4, 0));
        // Short words are fine regardless of constraint reach
        assert!(policy.admits(2, 4, 3));
    }

    #[test]
    fn constraint_reach_rejects_short_words() {
        let policy = LengthPolicy::ConstraintReach;
        assert!(policy.admits(3, 0, 3));
        assert!(!policy.admits(2, 10, 3));
        assert!(policy.admits(9, 4, 3));
    }

    #[test]
    fn both_applies_both_bounds() {
        let policy = LengthPolicy::Both;
        assert!(policy.admits(3, 4, 3));
        assert!(!policy.admits(2, 4, 3));
        assert!(!policy.admits(5, 4, 3));
    }
}

//! Per-hour, per-skill coverage rule.

use serde::{Deserialize, Serialize};

/// Fulfillment of one skill during one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coverage {
    /// Nobody on the skill.
    None,
    /// Exactly one untrained worker.
    Half,
    /// At least one trained worker, or two or more untrained workers.
    Full,
}

impl Coverage {
    /// Classifies the staffing of one skill-hour.
    ///
    /// Extra staff beyond full coverage adds nothing.
    pub fn from_staff(trained: usize, untrained: usize) -> Self {
        match (trained, untrained) {
            (t, _) if t >= 1 => Coverage::Full,
            (_, u) if u >= 2 => Coverage::Full,
            (_, 1) => Coverage::Half,
            _ => Coverage::None,
        }
    }

    /// Numeric value in `{0.0, 0.5, 1.0}`.
    pub fn value(self) -> f64 {
        match self {
            Coverage::None => 0.0,
            Coverage::Half => 0.5,
            Coverage::Full => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_table() {
        assert_eq!(Coverage::from_staff(0, 0), Coverage::None);
        assert_eq!(Coverage::from_staff(0, 1), Coverage::Half);
        assert_eq!(Coverage::from_staff(0, 2), Coverage::Full);
        assert_eq!(Coverage::from_staff(1, 0), Coverage::Full);
        assert_eq!(Coverage::from_staff(1, 1), Coverage::Full);
    }

    #[test]
    fn test_coverage_never_exceeds_one() {
        for t in 0..6 {
            for u in 0..6 {
                let v = Coverage::from_staff(t, u).value();
                assert!(v == 0.0 || v == 0.5 || v == 1.0);
                assert!(v <= 1.0);
            }
        }
    }
}

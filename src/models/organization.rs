//! Organization-wide cost parameters.

use serde::{Deserialize, Serialize};

/// Cost parameters shared by every day of the horizon.
///
/// Immutable once the problem is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Overtime pay as a percentage of base salary (e.g. 150 = time and a half).
    pub overtime_modifier_percent: u32,
    /// Cost charged for every day of the horizon, open or closed.
    pub fixed_daily_cost: f64,
}

impl Organization {
    /// Creates the organization parameters.
    pub fn new(overtime_modifier_percent: u32, fixed_daily_cost: f64) -> Self {
        Self {
            overtime_modifier_percent,
            fixed_daily_cost,
        }
    }

    /// Overtime hourly rate: `floor(salary × percent / 100)`.
    ///
    /// Always floored, never rounded.
    pub fn overtime_rate(&self, salary_per_hour: f64) -> f64 {
        (salary_per_hour * self.overtime_modifier_percent as f64 / 100.0).floor()
    }
}

//! Shift model.

use serde::{Deserialize, Serialize};

use super::{DayId, EmployeeId};

/// One employee working one skill on one day over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shift {
    /// Assigned employee.
    pub employee_id: EmployeeId,
    /// Day of the shift.
    pub day_id: DayId,
    /// First hour worked (inclusive).
    pub start: u32,
    /// Hour the shift ends (exclusive).
    pub end: u32,
    /// Skill covered during the shift.
    pub skill: String,
}

impl Shift {
    /// Creates a shift.
    pub fn new(
        employee_id: EmployeeId,
        day_id: DayId,
        start: u32,
        end: u32,
        skill: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            day_id,
            start,
            end,
            skill: skill.into(),
        }
    }

    /// Number of hours worked (0 for an empty or inverted interval).
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the shift is active during hour `h`.
    #[inline]
    pub fn is_active_at(&self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }

    /// Interval overlap test: `max(s1, s2) < min(e1, e2)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }
}

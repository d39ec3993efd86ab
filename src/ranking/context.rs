//! Ranking inputs.

use crate::models::{DayId, Employee, EmployeeId};

/// An employee available for a skill, with the state rules need.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Static employee record.
    pub employee: &'a Employee,
    /// Whether the employee currently counts as trained in the skill.
    pub trained: bool,
    /// Hours already worked this block week.
    pub weekly_hours_used: u32,
    /// Cost of the next hour (base or floored overtime).
    pub projected_cost: f64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate.
    pub fn new(
        employee: &'a Employee,
        trained: bool,
        weekly_hours_used: u32,
        projected_cost: f64,
    ) -> Self {
        Self {
            employee,
            trained,
            weekly_hours_used,
            projected_cost,
        }
    }

    /// Employee id.
    #[inline]
    pub fn id(&self) -> EmployeeId {
        self.employee.id
    }

    /// Base-rate hours left this block week.
    pub fn hours_left(&self) -> u32 {
        self.employee
            .max_hours_per_week
            .saturating_sub(self.weekly_hours_used)
    }
}

/// What the candidates are being ranked for.
#[derive(Debug, Clone, Default)]
pub struct RankingContext {
    /// Day being staffed.
    pub day_id: DayId,
    /// Skill being staffed.
    pub skill: String,
}

impl RankingContext {
    /// Creates a context for a day and skill.
    pub fn new(day_id: DayId, skill: impl Into<String>) -> Self {
        Self {
            day_id,
            skill: skill.into(),
        }
    }
}

//! Employee model.
//!
//! Static employee attributes only. Training progress and weekly hours
//! live in [`SimulationState`](crate::simulation::SimulationState), which
//! is created fresh for every simulation pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::DayId;

/// Employee identifier.
pub type EmployeeId = u32;

/// An employee that can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee id.
    pub id: EmployeeId,
    /// Hours billed at base rate per block week.
    pub max_hours_per_week: u32,
    /// Base hourly salary.
    pub salary_per_hour: f64,
    /// Training points gained per untrained hour (before teacher bonus).
    pub learning_rate: f64,
    /// Multiplier this employee gives to untrained co-workers when trained.
    pub teaching_rate: f64,
    /// Skills the employee is already trained in.
    pub initial_skills: BTreeSet<String>,
    /// Days the employee cannot work.
    pub vacation_days: BTreeSet<DayId>,
}

impl Employee {
    /// Creates an employee with no skills, no vacation, and zero learning/teaching.
    pub fn new(id: EmployeeId, max_hours_per_week: u32, salary_per_hour: f64) -> Self {
        Self {
            id,
            max_hours_per_week,
            salary_per_hour,
            learning_rate: 0.0,
            teaching_rate: 0.0,
            initial_skills: BTreeSet::new(),
            vacation_days: BTreeSet::new(),
        }
    }

    /// Sets the learning rate.
    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Sets the teaching rate.
    pub fn with_teaching_rate(mut self, rate: f64) -> Self {
        self.teaching_rate = rate;
        self
    }

    /// Adds an initial (trained) skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.initial_skills.insert(skill.into());
        self
    }

    /// Adds a vacation day.
    pub fn with_vacation(mut self, day_id: DayId) -> Self {
        self.vacation_days.insert(day_id);
        self
    }

    /// Whether the employee is on vacation on a day.
    pub fn is_on_vacation(&self, day_id: DayId) -> bool {
        self.vacation_days.contains(&day_id)
    }

    /// Whether the employee starts trained in a skill.
    pub fn has_initial_skill(&self, skill: &str) -> bool {
        self.initial_skills.contains(skill)
    }
}

//! Per-pass simulation state.
//!
//! Training progress and weekly hours are owned by one evaluation pass.
//! Independent passes (including parallel what-if evaluations) each need
//! their own copy; the state is `Clone` for that purpose.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{EmployeeId, Problem};

/// Evolving state of one employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeState {
    /// Accumulated training points per skill.
    pub training_points: BTreeMap<String, f64>,
    /// Skills the employee counts as trained in.
    ///
    /// Updated only when a staged promotion is applied, so it can lag
    /// `training_points` by up to one hour.
    pub trained: BTreeSet<String>,
    /// Hours worked in the current block week.
    pub weekly_hours_used: u32,
}

impl EmployeeState {
    /// Whether the employee currently counts as trained in a skill.
    pub fn is_trained(&self, skill: &str) -> bool {
        self.trained.contains(skill)
    }

    /// Training points for a skill (0 if never trained).
    pub fn points(&self, skill: &str) -> f64 {
        self.training_points.get(skill).copied().unwrap_or(0.0)
    }
}

/// Training and hour counters for every employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    employees: BTreeMap<EmployeeId, EmployeeState>,
}

impl SimulationState {
    /// Fresh state: initial skills seeded and trained, zero hours.
    pub fn fresh(problem: &Problem) -> Self {
        let seeded = problem.config.seeded_points;
        let threshold = problem.config.training_threshold;
        let employees = problem
            .employees
            .iter()
            .map(|e| {
                let mut state = EmployeeState::default();
                for skill in &e.initial_skills {
                    state.training_points.insert(skill.clone(), seeded);
                    if seeded >= threshold {
                        state.trained.insert(skill.clone());
                    }
                }
                (e.id, state)
            })
            .collect();
        Self { employees }
    }

    /// State of one employee.
    pub fn employee(&self, id: EmployeeId) -> Option<&EmployeeState> {
        self.employees.get(&id)
    }

    pub(crate) fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut EmployeeState> {
        self.employees.get_mut(&id)
    }

    /// Whether an employee counts as trained in a skill.
    pub fn is_trained(&self, id: EmployeeId, skill: &str) -> bool {
        self.employees.get(&id).is_some_and(|s| s.is_trained(skill))
    }

    /// Training points of an employee for a skill.
    pub fn points(&self, id: EmployeeId, skill: &str) -> f64 {
        self.employees.get(&id).map_or(0.0, |s| s.points(skill))
    }

    /// Hours an employee has worked this block week.
    pub fn weekly_hours_used(&self, id: EmployeeId) -> u32 {
        self.employees.get(&id).map_or(0, |s| s.weekly_hours_used)
    }

    /// Resets every weekly hour counter (start of a block week).
    pub fn reset_week(&mut self) {
        for state in self.employees.values_mut() {
            state.weekly_hours_used = 0;
        }
    }

    /// Number of (employee, skill) pairs currently trained.
    pub fn trained_count(&self) -> usize {
        self.employees.values().map(|s| s.trained.len()).sum()
    }

    /// Iterates `(employee_id, state)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeId, &EmployeeState)> {
        self.employees.iter().map(|(&id, s)| (id, s))
    }
}

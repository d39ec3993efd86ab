//! Problem container.
//!
//! Bundles the typed inputs a loader produces: organization parameters,
//! the ordered day horizon, the employee roster, and rule constants.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Day, DayId, Employee, EmployeeId, Organization};
use crate::config::SimulationConfig;

/// Input for validation, simulation, and scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Organization-wide cost parameters.
    pub organization: Organization,
    /// Days in ascending id order (ids `1..=N`).
    pub days: Vec<Day>,
    /// Employee roster.
    pub employees: Vec<Employee>,
    /// Rule constants.
    #[serde(default)]
    pub config: SimulationConfig,
    #[serde(skip)]
    employee_index: HashMap<EmployeeId, usize>,
}

impl Problem {
    /// Creates a problem with default rule constants.
    pub fn new(organization: Organization, days: Vec<Day>, employees: Vec<Employee>) -> Self {
        let mut problem = Self {
            organization,
            days,
            employees,
            config: SimulationConfig::default(),
            employee_index: HashMap::new(),
        };
        problem.reindex();
        problem
    }

    /// Sets the rule constants.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Rebuilds the employee lookup.
    ///
    /// Call after mutating `employees` directly or after deserializing.
    /// With duplicate ids the first occurrence wins.
    pub fn reindex(&mut self) {
        self.employee_index.clear();
        for (i, e) in self.employees.iter().enumerate() {
            self.employee_index.entry(e.id).or_insert(i);
        }
    }

    /// Looks up an employee by id.
    ///
    /// A stale index entry (after editing `employees` without `reindex`)
    /// falls back to a scan.
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employee_index
            .get(&id)
            .and_then(|&i| self.employees.get(i))
            .filter(|e| e.id == id)
            .or_else(|| self.employees.iter().find(|e| e.id == id))
    }

    /// Looks up a day by id.
    ///
    /// Days are dense from 1, so this is a direct index with a fallback
    /// scan for inputs that are not.
    pub fn day(&self, id: DayId) -> Option<&Day> {
        id.checked_sub(1)
            .and_then(|i| self.days.get(i as usize))
            .filter(|d| d.id == id)
            .or_else(|| self.days.iter().find(|d| d.id == id))
    }

    /// Number of days in the horizon.
    pub fn horizon(&self) -> usize {
        self.days.len()
    }

    /// Employees ordered by id.
    pub fn employees_by_id(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by_key(|e| e.id);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_problem() -> Problem {
        Problem::new(
            Organization::new(150, 100.0),
            vec![
                Day::open(1, 8, 16, 1000.0).with_skill("Register"),
                Day::closed(2),
            ],
            vec![Employee::new(20, 40, 10.0), Employee::new(10, 40, 12.0)],
        )
    }

    #[test]
    fn test_lookups() {
        let p = sample_problem();
        assert_eq!(p.employee(10).map(|e| e.id), Some(10));
        assert!(p.employee(99).is_none());
        assert!(p.day(2).is_some_and(|d| !d.is_open));
        assert!(p.day(0).is_none());
        assert!(p.day(3).is_none());
        assert_eq!(p.horizon(), 2);
    }

    #[test]
    fn test_lookup_with_stale_index() {
        let mut p = Problem::new(
            Organization::new(150, 0.0),
            vec![Day::open(1, 8, 10, 0.0).with_skill("Register")],
            vec![Employee::new(1, 40, 10.0), Employee::new(2, 40, 99.0)],
        );
        p.employees.remove(0);

        assert!(p.employee(1).is_none());
        assert_eq!(p.employee(2).map(|e| e.salary_per_hour), Some(99.0));

        p.employees.push(Employee::new(1, 40, 11.0));
        assert_eq!(p.employee(1).map(|e| e.salary_per_hour), Some(11.0));
    }

    #[test]
    fn test_employees_by_id() {
        let p = sample_problem();
        let ids: Vec<EmployeeId> = p.employees_by_id().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_lookup_after_deserialize() {
        let p = sample_problem();
        let json = serde_json::to_string(&p).unwrap();
        let back: Problem = serde_json::from_str(&json).unwrap();
        // Index is skipped by serde; lookup falls back to a scan.
        assert_eq!(back.employee(20).map(|e| e.max_hours_per_week), Some(40));
        assert_eq!(back.config, p.config);
    }
}

//! Hourly pay rule.
//!
//! The only place that decides between base and overtime pay. The
//! simulator bills with it and the scheduler ranks with it.

use crate::models::{Employee, Organization};

/// Whether the next hour worked falls past the weekly cap.
#[inline]
pub fn is_overtime(employee: &Employee, weekly_hours_used: u32) -> bool {
    weekly_hours_used >= employee.max_hours_per_week
}

/// Cost of the next hour an employee works this block week.
///
/// Base salary while `weekly_hours_used < max_hours_per_week`, otherwise
/// `floor(salary × overtime_percent / 100)`.
pub fn hourly_cost(
    employee: &Employee,
    weekly_hours_used: u32,
    organization: &Organization,
) -> f64 {
    if is_overtime(employee, weekly_hours_used) {
        organization.overtime_rate(employee.salary_per_hour)
    } else {
        employee.salary_per_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_then_overtime() {
        let org = Organization::new(150, 0.0);
        let e = Employee::new(1, 2, 15.0);
        assert!((hourly_cost(&e, 0, &org) - 15.0).abs() < 1e-10);
        assert!((hourly_cost(&e, 1, &org) - 15.0).abs() < 1e-10);
        // 15 * 150 / 100 = 22.5 → 22
        assert!((hourly_cost(&e, 2, &org) - 22.0).abs() < 1e-10);
        assert!((hourly_cost(&e, 10, &org) - 22.0).abs() < 1e-10);
    }

    #[test]
    fn test_is_overtime_boundary() {
        let e = Employee::new(1, 40, 10.0);
        assert!(!is_overtime(&e, 39));
        assert!(is_overtime(&e, 40));
    }
}

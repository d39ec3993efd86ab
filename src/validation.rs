//! Input and schedule validation.
//!
//! Both checks are exhaustive: every finding is collected instead of
//! stopping at the first fault.
//!
//! - [`validate_problem`]: integrity of the typed inputs (duplicate ids,
//!   non-dense day numbering, bad windows, repeated skills).
//! - [`validate_schedule`]: structural constraints of a schedule against
//!   its problem (unknown references, vacations, closed days, windows,
//!   overlaps).
//!
//! A schedule with any finding is invalid and must not be scored by the
//! normal rules.

use crate::models::{Problem, Schedule, Shift};
use std::collections::{BTreeMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same id.
    DuplicateId,
    /// Day ids are not `1..=N` in order.
    NonSequentialDay,
    /// An open day has an empty or out-of-range hour window.
    InvalidWindow,
    /// A day lists the same required skill more than once.
    DuplicateSkill,
    /// An employee or the organization carries an unusable value.
    InvalidAmount,
    /// A shift references an employee that doesn't exist.
    UnknownEmployee,
    /// A schedule entry or shift references a day outside the horizon.
    UnknownDay,
    /// A shift is listed under a day other than its own.
    DayMismatch,
    /// A shift covers a skill the day does not require.
    UnknownSkill,
    /// Employee scheduled on a vacation day.
    OnVacation,
    /// Shift on a closed day.
    ClosedDay,
    /// Shift not inside the day's open window.
    OutsideOpenWindow,
    /// Shift with `start >= end`.
    EmptyInterval,
    /// Two shifts of the same employee overlap on the same day.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the typed problem inputs.
///
/// Checks:
/// 1. No duplicate employee ids
/// 2. Day ids are `1..=N` in list order
/// 3. Open days have `start < end <= 24`
/// 4. No day lists a required skill twice
/// 5. Employees have a positive weekly cap and non-negative rates
/// 6. Organization fixed cost and day revenue potentials are non-negative
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in &problem.employees {
        if !employee_ids.insert(e.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        if e.max_hours_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAmount,
                format!("Employee {} has a zero weekly hour cap", e.id),
            ));
        }
        for (field, value) in [
            ("salary", e.salary_per_hour),
            ("learning rate", e.learning_rate),
            ("teaching rate", e.teaching_rate),
        ] {
            if value.is_nan() || value < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAmount,
                    format!("Employee {} has invalid {field}: {value}", e.id),
                ));
            }
        }
    }

    let fixed = problem.organization.fixed_daily_cost;
    if fixed.is_nan() || fixed < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAmount,
            format!("Invalid fixed daily cost: {fixed}"),
        ));
    }

    for (i, day) in problem.days.iter().enumerate() {
        let expected = i as u32 + 1;
        if day.id != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonSequentialDay,
                format!("Day at position {i} has ID {} (expected {expected})", day.id),
            ));
        }

        let revenue = day.revenue_potential;
        if revenue.is_nan() || revenue < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAmount,
                format!("Day {} has invalid revenue potential: {revenue}", day.id),
            ));
        }

        if !day.is_open {
            continue;
        }

        if day.start >= day.end || day.end > 24 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!("Day {} has invalid window [{}, {})", day.id, day.start, day.end),
            ));
        }

        let mut seen = HashSet::new();
        for skill in &day.required_skills {
            if !seen.insert(skill.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSkill,
                    format!("Day {} lists skill '{skill}' more than once", day.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a schedule against its problem.
///
/// Checks, for every shift:
/// 1. The listed day exists and matches the shift's own day
/// 2. The employee exists and is not on vacation that day
/// 3. The day is open (closed days carry no shifts)
/// 4. `start < end` and, on open days, the shift lies inside the window
/// 5. On open days, the skill is required that day
/// 6. No two shifts of the same employee on that day overlap
///
/// Days missing from the schedule are treated as having no shifts.
pub fn validate_schedule(schedule: &Schedule, problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    for (day_id, plan) in schedule.iter() {
        let Some(day) = problem.day(day_id) else {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Schedule lists unknown day {day_id}"),
            ));
            continue;
        };

        let mut by_employee: BTreeMap<u32, Vec<&Shift>> = BTreeMap::new();

        for shift in plan.shifts() {
            let who = shift.employee_id;

            if shift.day_id != day_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DayMismatch,
                    format!(
                        "Shift of employee {who} for day {} listed under day {day_id}",
                        shift.day_id
                    ),
                ));
            }

            match problem.employee(who) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownEmployee,
                    format!("Shift on day {day_id} references unknown employee {who}"),
                )),
                Some(e) if e.is_on_vacation(day_id) => errors.push(ValidationError::new(
                    ValidationErrorKind::OnVacation,
                    format!("Employee {who} is on vacation on day {day_id}"),
                )),
                Some(_) => {}
            }

            if !day.is_open {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ClosedDay,
                    format!("Employee {who} scheduled on closed day {day_id}"),
                ));
            }

            if shift.start >= shift.end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyInterval,
                    format!(
                        "Shift of employee {who} on day {day_id} has empty interval [{}, {})",
                        shift.start, shift.end
                    ),
                ));
            } else if day.is_open && !day.contains_window(shift.start, shift.end) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutsideOpenWindow,
                    format!(
                        "Shift [{}, {}) of employee {who} is outside day {day_id} window [{}, {})",
                        shift.start, shift.end, day.start, day.end
                    ),
                ));
            }

            if day.is_open && !day.requires(&shift.skill) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSkill,
                    format!(
                        "Shift of employee {who} covers skill '{}' not required on day {day_id}",
                        shift.skill
                    ),
                ));
            }

            by_employee.entry(who).or_default().push(shift);
        }

        for (who, shifts) in &by_employee {
            for (i, a) in shifts.iter().enumerate() {
                for b in &shifts[i + 1..] {
                    if a.overlaps(b) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::Overlap,
                            format!(
                                "Employee {who} has overlapping shifts [{}, {}) and [{}, {}) \
                                 on day {day_id}",
                                a.start, a.end, b.start, b.end
                            ),
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Fatal simulation errors.
//!
//! These indicate that a schedule reached the simulator without passing
//! [`validate_schedule`](crate::validation::validate_schedule) first.
//! Structural findings are reported by the validator as data instead.

use thiserror::Error;

use crate::models::{DayId, EmployeeId};

/// A simulation invariant was broken by the input schedule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A shift references an employee absent from the problem.
    #[error("shift on day {day_id} references unknown employee {employee_id}")]
    UnknownEmployee { employee_id: EmployeeId, day_id: DayId },

    /// A schedule entry or shift references a day absent from the horizon.
    #[error("schedule references unknown day {day_id}")]
    UnknownDay { day_id: DayId },

    /// A shift covers a skill the day does not require.
    #[error("shift for employee {employee_id} on day {day_id} covers unrequired skill '{skill}'")]
    UnknownSkill {
        employee_id: EmployeeId,
        day_id: DayId,
        skill: String,
    },

    /// A shift is listed under a day other than its own.
    #[error("shift for day {shift_day} listed under day {listed_day}")]
    DayMismatch { listed_day: DayId, shift_day: DayId },
}

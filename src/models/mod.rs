//! Workforce scheduling domain models.
//!
//! Plain data records with builders; no scoring behavior lives here.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Organization | Overtime modifier and fixed daily cost |
//! | Day | Open window, revenue potential, required skills |
//! | Employee | Weekly cap, salary, learning/teaching rates, skills, vacation |
//! | Shift | Employee × day × `[start, end)` × skill |
//! | Schedule | Day id → closed marker or shift list |
//! | Problem | Everything above plus rule constants |

mod day;
mod employee;
mod organization;
mod problem;
mod schedule;
mod shift;

pub use day::{Day, DayId};
pub use employee::{Employee, EmployeeId};
pub use organization::Organization;
pub use problem::Problem;
pub use schedule::{DayPlan, Schedule};
pub use shift::Shift;

//! Coverage, training, and payroll simulation.
//!
//! The simulator is the source of truth for what a schedule is worth.
//! It replays a schedule day by day and hour by hour on an owned
//! [`SimulationState`], so training gained early in the horizon changes
//! coverage and pay classification later on.
//!
//! # Rules
//!
//! | Rule | Where |
//! |------|-------|
//! | Coverage per skill-hour ∈ {0, 0.5, 1} | [`Coverage`] |
//! | Base vs. floored overtime pay | [`payroll`] |
//! | Hour loop, promotions, weekly blocks | [`Simulator::advance_day`] |

mod coverage;
pub mod payroll;
mod simulator;
mod state;

pub use coverage::Coverage;
pub use simulator::{DayReport, SimulationResult, Simulator};
pub use state::{EmployeeState, SimulationState};

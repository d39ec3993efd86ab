//! Workforce shift scheduling and scoring.
//!
//! Assigns employees to hourly shifts over a multi-day horizon so that
//! per-hour skill requirements are covered, and scores any candidate
//! schedule as revenue less payroll and fixed costs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Organization`, `Day`, `Employee`, `Shift`,
//!   `Schedule`, `Problem`
//! - **`validation`**: Input integrity and schedule constraint checks
//! - **`simulation`**: Hour-by-hour coverage, training, and payroll replay
//!   (the authoritative scorer)
//! - **`ranking`**: Pluggable candidate-ranking rules for the scheduler
//! - **`scheduler`**: Greedy schedule construction and score aggregation
//! - **`config`**: Rule constants (training threshold, block week length)
//! - **`error`**: Fatal simulation errors
//!
//! # Pipeline
//!
//! ```
//! use shift_planner::models::{Day, Employee, Organization, Problem};
//! use shift_planner::scheduler::{GreedyScheduler, ScheduleScore};
//!
//! let problem = Problem::new(
//!     Organization::new(150, 100.0),
//!     vec![
//!         Day::open(1, 8, 16, 2000.0).with_skills(["Register", "Grill"]),
//!         Day::closed(2),
//!     ],
//!     vec![
//!         Employee::new(1, 40, 15.0).with_skill("Register").with_teaching_rate(2.0),
//!         Employee::new(2, 40, 11.0).with_learning_rate(10.0),
//!         Employee::new(3, 40, 12.0).with_learning_rate(10.0),
//!     ],
//! );
//!
//! let schedule = GreedyScheduler::new().schedule(&problem).unwrap();
//! let score = ScheduleScore::calculate(&problem, &schedule).unwrap();
//! assert!(!score.is_rejected());
//! assert!((score.average_capacity - 1.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::SimulationError;

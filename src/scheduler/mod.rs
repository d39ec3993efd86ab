//! Greedy scheduler and schedule scoring.
//!
//! # Algorithm
//!
//! `GreedyScheduler` staffs each open day skill by skill with the best
//! ranked candidates, then commits the day through the simulator so later
//! days see the resulting training and weekly hours. It is a heuristic;
//! no search or backtracking is performed.
//!
//! # Score
//!
//! `ScheduleScore` validates a schedule, replays it, and aggregates the
//! per-day profit breakdown.

mod greedy;
mod score;

pub use greedy::GreedyScheduler;
pub use score::ScheduleScore;

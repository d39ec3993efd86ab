//! Rule constants for coverage, training, and weekly hour accounting.
//!
//! Defaults match the scoring rules used by every planner that compares
//! scores; override them only for what-if experiments.

use serde::{Deserialize, Serialize};

/// Training points at which an employee counts as trained in a skill.
pub const TRAINING_THRESHOLD: f64 = 1000.0;

/// Length of a block week in days. Blocks are anchored at day 1.
pub const WEEK_LENGTH_DAYS: u32 = 7;

/// Tunable simulation constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Points needed to become trained in a skill.
    pub training_threshold: f64,
    /// Points pre-seeded for each initial skill.
    pub seeded_points: f64,
    /// Days per non-overlapping weekly block (anchored at day 1).
    pub week_length_days: u32,
    /// Teaching multiplier when no trained co-worker is present.
    pub default_teacher_bonus: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            training_threshold: TRAINING_THRESHOLD,
            seeded_points: TRAINING_THRESHOLD,
            week_length_days: WEEK_LENGTH_DAYS,
            default_teacher_bonus: 1.0,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the training threshold.
    pub fn with_training_threshold(mut self, threshold: f64) -> Self {
        self.training_threshold = threshold;
        self
    }

    /// Sets the points seeded for initial skills.
    pub fn with_seeded_points(mut self, points: f64) -> Self {
        self.seeded_points = points;
        self
    }

    /// Sets the block week length. Zero is treated as one.
    pub fn with_week_length(mut self, days: u32) -> Self {
        self.week_length_days = days.max(1);
        self
    }

    /// Sets the teaching multiplier used without a trained co-worker.
    pub fn with_default_teacher_bonus(mut self, bonus: f64) -> Self {
        self.default_teacher_bonus = bonus;
        self
    }
}

//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for preferred candidates.

use super::{Candidate, CandidateRule, RankingContext, RuleScore};

/// Trained candidates before untrained ones.
///
/// A single trained worker covers a skill fully, so trained staff are
/// tried first.
#[derive(Debug, Clone, Copy)]
pub struct TrainedFirst;

impl CandidateRule for TrainedFirst {
    fn name(&self) -> &'static str {
        "TRAINED"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &RankingContext) -> RuleScore {
        if candidate.trained {
            0.0
        } else {
            1.0
        }
    }
}

/// Cheapest next hour first.
///
/// Uses the projected cost: base salary while under the weekly cap,
/// floored overtime rate past it.
#[derive(Debug, Clone, Copy)]
pub struct LowestCost;

impl CandidateRule for LowestCost {
    fn name(&self) -> &'static str {
        "COST"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &RankingContext) -> RuleScore {
        candidate.projected_cost
    }
}

/// Most base-rate hours left this block week first.
///
/// Spreads work so fewer employees tip into overtime later in the week.
#[derive(Debug, Clone, Copy)]
pub struct MostHoursLeft;

impl CandidateRule for MostHoursLeft {
    fn name(&self) -> &'static str {
        "HOURS_LEFT"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &RankingContext) -> RuleScore {
        -(candidate.hours_left() as f64)
    }
}

/// Fastest learner first.
///
/// Only meaningful among untrained candidates; trained ones learn nothing.
#[derive(Debug, Clone, Copy)]
pub struct FastestLearner;

impl CandidateRule for FastestLearner {
    fn name(&self) -> &'static str {
        "LEARNER"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &RankingContext) -> RuleScore {
        if candidate.trained {
            0.0
        } else {
            -candidate.employee.learning_rate
        }
    }
}

/// Best teacher first among trained candidates.
#[derive(Debug, Clone, Copy)]
pub struct BestTeacher;

impl CandidateRule for BestTeacher {
    fn name(&self) -> &'static str {
        "TEACHER"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &RankingContext) -> RuleScore {
        if candidate.trained {
            -candidate.employee.teaching_rate
        } else {
            0.0
        }
    }
}

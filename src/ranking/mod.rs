//! Candidate ranking rules and rule engine.
//!
//! The greedy scheduler asks a [`RankingEngine`] to order the employees
//! available for a skill. Rules only decide *order*; coverage, training,
//! and pay are always taken from the simulator's rules.
//!
//! # Usage
//!
//! ```
//! use shift_planner::ranking::{rules, RankingEngine, TieBreaker};
//!
//! // Equivalent to RankingEngine::standard()
//! let engine = RankingEngine::new()
//!     .with_rule(rules::TrainedFirst)
//!     .with_rule(rules::LowestCost)
//!     .with_final_tie_breaker(TieBreaker::ById);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::{Candidate, RankingContext};
pub use engine::{RankingEngine, TieBreaker};

use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = preferred candidate.
pub type RuleScore = f64;

/// A rule that scores a candidate employee for a skill on a day.
///
/// # Score Convention
/// **Lower score = ranked earlier.**
pub trait CandidateRule: Send + Sync + Debug {
    /// Rule name (e.g., "TRAINED", "COST").
    fn name(&self) -> &'static str;

    /// Scores a candidate; lower is better.
    fn evaluate(&self, candidate: &Candidate<'_>, context: &RankingContext) -> RuleScore;
}

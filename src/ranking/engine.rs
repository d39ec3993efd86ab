//! Rule engine for multi-criteria candidate ranking.
//!
//! Rules are applied lexicographically: the next rule is consulted only
//! when every earlier rule ties within epsilon. A final tie-breaker
//! settles candidates that tie on every rule.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, Candidate, CandidateRule, RankingContext};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Lower employee id first (default).
    #[default]
    ById,
    /// Keep the input order.
    Stable,
}

/// A composable rule engine for candidate ranking.
///
/// # Example
/// ```
/// use shift_planner::ranking::{rules, RankingEngine, TieBreaker};
///
/// let engine = RankingEngine::new()
///     .with_rule(rules::LowestCost)
///     .with_rule(rules::TrainedFirst)
///     .with_final_tie_breaker(TieBreaker::Stable);
/// assert_eq!(engine.rule_names(), vec!["COST", "TRAINED"]);
/// ```
#[derive(Clone)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn CandidateRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RankingEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::ById,
            epsilon: 1e-9,
        }
    }

    /// Trained first, then cheapest next hour, then lowest id.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::TrainedFirst)
            .with_rule(rules::LowestCost)
    }

    /// Cheapest next hour first, then trained, then lowest id.
    pub fn cost_first() -> Self {
        Self::new()
            .with_rule(rules::LowestCost)
            .with_rule(rules::TrainedFirst)
    }

    /// Invests in training.
    ///
    /// Trained staff still come first, the strongest teacher among them
    /// leading. Untrained staff are ordered by learning rate, then by
    /// base-rate hours left, then by cost.
    pub fn learner_first() -> Self {
        Self::new()
            .with_rule(rules::TrainedFirst)
            .with_rule(rules::BestTeacher)
            .with_rule(rules::FastestLearner)
            .with_rule(rules::MostHoursLeft)
            .with_rule(rules::LowestCost)
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: CandidateRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Rule names in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates, best first.
    ///
    /// Returns indices into the given slice.
    pub fn sort_indices(
        &self,
        candidates: &[Candidate<'_>],
        context: &RankingContext,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&candidates[a], &candidates[b], context));
        indices
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>, context: &RankingContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::ById => a.id().cmp(&b.id()),
            TieBreaker::Stable => Ordering::Equal,
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

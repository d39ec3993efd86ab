//! Schedule score and diagnostics.
//!
//! Validates a schedule, replays it through the simulator, and rolls the
//! daily reports up into horizon-level indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total score | Sum of daily profits |
//! | Revenue | Sum of `revenue_potential × capacity²` |
//! | Payroll | Sum of billed wages |
//! | Overtime hours | Hours billed past the weekly cap |
//! | Average capacity | Mean capacity over open days |
//! | Uncovered skill-hours | Required minus achieved skill-hours |
//! | Promotions | Skills newly trained during the horizon |
//!
//! An invalid schedule is rejected with a score of 0 and is never
//! simulated.

use crate::error::SimulationError;
use crate::models::{Problem, Schedule};
use crate::simulation::{DayReport, Simulator};
use crate::validation::{validate_schedule, ValidationError};

/// Horizon-level score of a schedule.
#[derive(Debug, Clone)]
pub struct ScheduleScore {
    /// Sum of daily profits (0 when rejected).
    pub total_score: f64,
    /// Per-day breakdown (empty when rejected).
    pub days: Vec<DayReport>,
    /// Total revenue earned.
    pub total_revenue: f64,
    /// Total wages billed.
    pub total_payroll: f64,
    /// Total fixed costs charged.
    pub total_fixed_cost: f64,
    /// Hours billed at the overtime rate.
    pub overtime_hours: u32,
    /// Mean capacity over open days (0.0..1.0).
    pub average_capacity: f64,
    /// Required skill-hours not covered.
    pub uncovered_skill_hours: f64,
    /// Skills newly trained over the horizon.
    pub promotions: usize,
    /// Validation findings; non-empty means rejected.
    pub violations: Vec<ValidationError>,
}

impl ScheduleScore {
    /// Validates and scores a schedule.
    ///
    /// Validation findings produce a rejected score rather than an error.
    /// Errors are returned only if the simulator hits a broken invariant
    /// the validator did not catch.
    pub fn calculate(problem: &Problem, schedule: &Schedule) -> Result<Self, SimulationError> {
        if let Err(violations) = validate_schedule(schedule, problem) {
            log::warn!(
                "schedule rejected with {} violation(s); first: {}",
                violations.len(),
                violations
                    .first()
                    .map(|v| v.message.as_str())
                    .unwrap_or_default()
            );
            return Ok(Self::rejected(violations));
        }

        let result = Simulator::new(problem).run(schedule)?;
        let score = Self::from_reports(result.days);
        log::info!(
            "schedule score {:.2} (revenue {:.2}, payroll {:.2}, avg capacity {:.3})",
            score.total_score,
            score.total_revenue,
            score.total_payroll,
            score.average_capacity
        );
        Ok(score)
    }

    /// Aggregates daily reports.
    pub fn from_reports(days: Vec<DayReport>) -> Self {
        let total_score = days.iter().map(|d| d.profit).sum();
        let total_revenue = days.iter().map(|d| d.revenue).sum();
        let total_payroll = days.iter().map(|d| d.payroll).sum();
        let total_fixed_cost = days.iter().map(|d| d.fixed_cost).sum();
        let overtime_hours = days.iter().map(|d| d.overtime_hours).sum();
        let uncovered_skill_hours = days.iter().map(DayReport::uncovered_skill_hours).sum();
        let promotions = days.iter().map(|d| d.promotions).sum();

        let open: Vec<&DayReport> = days.iter().filter(|d| d.is_open).collect();
        let average_capacity = if open.is_empty() {
            0.0
        } else {
            open.iter().map(|d| d.capacity).sum::<f64>() / open.len() as f64
        };

        Self {
            total_score,
            days,
            total_revenue,
            total_payroll,
            total_fixed_cost,
            overtime_hours,
            average_capacity,
            uncovered_skill_hours,
            promotions,
            violations: Vec::new(),
        }
    }

    fn rejected(violations: Vec<ValidationError>) -> Self {
        Self {
            violations,
            ..Self::from_reports(Vec::new())
        }
    }

    /// Whether the schedule was rejected by validation.
    pub fn is_rejected(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Daily profits in day order.
    pub fn per_day_profit(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.profit).collect()
    }

    /// Whether the schedule is valid and scores at least `min_score`.
    pub fn meets_threshold(&self, min_score: f64) -> bool {
        !self.is_rejected() && self.total_score >= min_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Employee, Organization, Shift};
    use crate::validation::ValidationErrorKind;

    fn sample_problem() -> Problem {
        Problem::new(
            Organization::new(50, 100.0),
            vec![
                Day::open(1, 8, 10, 1000.0).with_skill("Register"),
                Day::closed(2),
                Day::open(3, 8, 10, 1000.0).with_skills(["Register", "Grill"]),
            ],
            vec![
                Employee::new(1, 40, 10.0).with_skill("Register"),
                Employee::new(2, 40, 10.0).with_learning_rate(1.0),
            ],
        )
    }

    #[test]
    fn test_score_aggregates_days() {
        let p = sample_problem();
        let mut s = Schedule::new();
        s.add_shift(Shift::new(1, 1, 8, 10, "Register"));
        s.set_closed(2);
        s.add_shift(Shift::new(1, 3, 8, 10, "Register"));

        let score = ScheduleScore::calculate(&p, &s).unwrap();
        assert!(!score.is_rejected());
        // Day 1: 1000 - 20 - 100 = 880
        // Day 2: -100
        // Day 3: capacity 2/4 = 0.5 → 250 - 20 - 100 = 130
        assert_eq!(score.per_day_profit(), vec![880.0, -100.0, 130.0]);
        assert!((score.total_score - 910.0).abs() < 1e-10);
        assert!((score.total_revenue - 1250.0).abs() < 1e-10);
        assert!((score.total_payroll - 40.0).abs() < 1e-10);
        assert!((score.total_fixed_cost - 300.0).abs() < 1e-10);
        assert!((score.average_capacity - 0.75).abs() < 1e-10);
        assert!((score.uncovered_skill_hours - 2.0).abs() < 1e-10);
        assert_eq!(score.overtime_hours, 0);
        assert!(score.meets_threshold(900.0));
        assert!(!score.meets_threshold(1000.0));
    }

    #[test]
    fn test_invalid_schedule_rejected() {
        let p = sample_problem();
        let mut s = Schedule::new();
        s.add_shift(Shift::new(1, 2, 8, 10, "Register"));

        let score = ScheduleScore::calculate(&p, &s).unwrap();
        assert!(score.is_rejected());
        assert!((score.total_score - 0.0).abs() < 1e-10);
        assert!(score.days.is_empty());
        assert_eq!(score.violations[0].kind, ValidationErrorKind::ClosedDay);
        assert!(!score.meets_threshold(-1e9));
    }

    #[test]
    fn test_empty_schedule_scores_fixed_costs() {
        let p = sample_problem();
        let score = ScheduleScore::calculate(&p, &Schedule::new()).unwrap();
        assert!((score.total_score + 300.0).abs() < 1e-10);
        assert!((score.average_capacity - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_reports_empty() {
        let score = ScheduleScore::from_reports(Vec::new());
        assert!((score.total_score - 0.0).abs() < 1e-10);
        assert_eq!(score.promotions, 0);
        assert!(!score.is_rejected());
    }
}

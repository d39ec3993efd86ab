//! Greedy day-by-day staffing heuristic.
//!
//! # Algorithm
//!
//! For each open day, in day order, and for each required skill in the
//! day's listed order:
//!
//! 1. Candidates are employees not on vacation and not already staffed
//!    that day.
//! 2. Candidates are ordered by the [`RankingEngine`] (default: trained
//!    first, cheapest next hour, lowest id).
//! 3. A trained top candidate works the whole open window alone.
//! 4. Otherwise the first two untrained candidates pair up for the
//!    window, or the single remaining one works it alone.
//! 5. With no candidates the skill stays uncovered.
//!
//! Each finished day is committed through
//! [`Simulator::replay_day`], so trained status and weekly hours seen
//! by later days are exactly what the simulator would compute.
//!
//! # Complexity
//! O(d · s · e log e) ranking plus the simulator's O(d · h · s · e)
//! replay, where d=days, h=hours, s=skills, e=employees.

use std::collections::BTreeSet;

use crate::error::SimulationError;
use crate::models::{Day, DayPlan, EmployeeId, Problem, Schedule, Shift};
use crate::ranking::{Candidate, RankingContext, RankingEngine};
use crate::simulation::{payroll, SimulationState, Simulator};

/// Greedy shift scheduler.
///
/// Single forward pass, no backtracking or lookahead.
///
/// # Example
///
/// ```
/// use shift_planner::models::{Day, Employee, Organization, Problem};
/// use shift_planner::scheduler::GreedyScheduler;
///
/// let problem = Problem::new(
///     Organization::new(150, 50.0),
///     vec![Day::open(1, 9, 17, 2000.0).with_skill("Register")],
///     vec![
///         Employee::new(1, 40, 15.0).with_skill("Register"),
///         Employee::new(2, 40, 10.0),
///     ],
/// );
///
/// let schedule = GreedyScheduler::new().schedule(&problem).unwrap();
/// assert_eq!(schedule.shift_count(), 1);
/// assert_eq!(schedule.shifts_for_day(1)[0].employee_id, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    ranking: RankingEngine,
}

impl GreedyScheduler {
    /// Creates a scheduler with the standard ranking.
    pub fn new() -> Self {
        Self {
            ranking: RankingEngine::standard(),
        }
    }

    /// Replaces the ranking strategy.
    pub fn with_ranking(mut self, ranking: RankingEngine) -> Self {
        self.ranking = ranking;
        self
    }

    /// Builds a schedule for the whole horizon.
    pub fn schedule(&self, problem: &Problem) -> Result<Schedule, SimulationError> {
        self.schedule_with_state(problem).map(|(schedule, _)| schedule)
    }

    /// Builds a schedule and returns the state it leaves behind.
    ///
    /// The returned state equals the final state of simulating the
    /// schedule from scratch.
    pub fn schedule_with_state(
        &self,
        problem: &Problem,
    ) -> Result<(Schedule, SimulationState), SimulationError> {
        let simulator = Simulator::new(problem);
        let mut state = SimulationState::fresh(problem);
        let mut schedule = Schedule::new();
        let mut projected = 0.0;

        let mut days: Vec<&Day> = problem.days.iter().collect();
        days.sort_by_key(|d| d.id);

        for day in days {
            simulator.begin_day(day, &mut state);

            if !day.is_open {
                projected += simulator.replay_day(day, &[], &mut state)?.profit;
                schedule.set_closed(day.id);
                continue;
            }

            let shifts = self.staff_day(problem, day, &state);
            projected += simulator.replay_day(day, &shifts, &mut state)?.profit;
            schedule.set_plan(day.id, DayPlan::Shifts(shifts));
        }

        log::info!(
            "scheduled {} shifts over {} days, projected score {:.2}",
            schedule.shift_count(),
            problem.horizon(),
            projected
        );

        Ok((schedule, state))
    }

    /// Picks shifts for one open day against the state at its start.
    fn staff_day(&self, problem: &Problem, day: &Day, state: &SimulationState) -> Vec<Shift> {
        let org = &problem.organization;
        let mut busy: BTreeSet<EmployeeId> = BTreeSet::new();
        let mut seen_skills: BTreeSet<&str> = BTreeSet::new();
        let mut shifts = Vec::new();

        for skill in &day.required_skills {
            if !seen_skills.insert(skill.as_str()) {
                continue;
            }

            let candidates: Vec<Candidate<'_>> = problem
                .employees
                .iter()
                .filter(|e| !e.is_on_vacation(day.id) && !busy.contains(&e.id))
                .map(|e| {
                    let used = state.weekly_hours_used(e.id);
                    Candidate::new(
                        e,
                        state.is_trained(e.id, skill),
                        used,
                        payroll::hourly_cost(e, used, org),
                    )
                })
                .collect();

            let context = RankingContext::new(day.id, skill.as_str());
            let order = self.ranking.sort_indices(&candidates, &context);

            let Some(&top) = order.first() else {
                log::debug!("day {}: no candidates for '{}'", day.id, skill);
                continue;
            };

            let picks: Vec<EmployeeId> = if candidates[top].trained {
                vec![candidates[top].id()]
            } else {
                order
                    .iter()
                    .filter(|&&i| !candidates[i].trained)
                    .take(2)
                    .map(|&i| candidates[i].id())
                    .collect()
            };

            if picks.len() == 1 && !candidates[top].trained {
                log::debug!(
                    "day {}: '{}' staffed by a single untrained employee",
                    day.id,
                    skill
                );
            }

            for id in picks {
                busy.insert(id);
                shifts.push(Shift::new(id, day.id, day.start, day.end, skill.as_str()));
            }
        }

        shifts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Organization};
    use crate::validation::validate_schedule;

    fn problem(days: Vec<Day>, employees: Vec<Employee>) -> Problem {
        Problem::new(Organization::new(150, 50.0), days, employees)
    }

    fn staff(schedule: &Schedule, day: u32) -> Vec<(u32, String)> {
        schedule
            .shifts_for_day(day)
            .iter()
            .map(|s| (s.employee_id, s.skill.clone()))
            .collect()
    }

    #[test]
    fn test_trained_worker_preferred() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register")],
            vec![
                Employee::new(1, 40, 5.0),
                Employee::new(2, 40, 20.0).with_skill("Register"),
            ],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert_eq!(staff(&s, 1), vec![(2, "Register".into())]);
        let shift = &s.shifts_for_day(1)[0];
        assert_eq!((shift.start, shift.end), (8, 16));
    }

    #[test]
    fn test_cheapest_trained_wins_then_id() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register")],
            vec![
                Employee::new(3, 40, 10.0).with_skill("Register"),
                Employee::new(2, 40, 10.0).with_skill("Register"),
                Employee::new(1, 40, 12.0).with_skill("Register"),
            ],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert_eq!(staff(&s, 1), vec![(2, "Register".into())]);
    }

    #[test]
    fn test_two_untrained_pair_up() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register")],
            vec![
                Employee::new(1, 40, 12.0),
                Employee::new(2, 40, 10.0),
                Employee::new(3, 40, 11.0),
            ],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert_eq!(
            staff(&s, 1),
            vec![(2, "Register".into()), (3, "Register".into())]
        );
    }

    #[test]
    fn test_single_untrained_alone() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register")],
            vec![Employee::new(1, 40, 12.0)],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert_eq!(staff(&s, 1), vec![(1, "Register".into())]);
    }

    #[test]
    fn test_uncovered_skill_and_vacation() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skills(["Register", "Grill"])],
            vec![
                Employee::new(1, 40, 12.0).with_skill("Register"),
                Employee::new(2, 40, 9.0).with_vacation(1),
            ],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        // Employee 1 takes Register; nobody is left for Grill.
        assert_eq!(staff(&s, 1), vec![(1, "Register".into())]);
    }

    #[test]
    fn test_closed_days_marked() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register"), Day::closed(2)],
            vec![Employee::new(1, 40, 12.0).with_skill("Register")],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert!(s.is_closed(2));
        assert!(validate_schedule(&s, &p).is_ok());
    }

    #[test]
    fn test_overtime_shifts_choice_to_cheaper_worker() {
        // Day 1 pushes employee 1 past the cap; on day 2 its overtime rate
        // floor(10 * 150 / 100) = 15 loses to employee 2 at 12.
        let p = problem(
            vec![
                Day::open(1, 8, 16, 1000.0).with_skill("Register"),
                Day::open(2, 8, 16, 1000.0).with_skill("Register"),
            ],
            vec![
                Employee::new(1, 8, 10.0).with_skill("Register"),
                Employee::new(2, 40, 12.0).with_skill("Register"),
            ],
        );
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert_eq!(staff(&s, 1), vec![(1, "Register".into())]);
        assert_eq!(staff(&s, 2), vec![(2, "Register".into())]);
    }

    #[test]
    fn test_training_carries_to_later_days() {
        // 8 hours × 125 points = 1000 on day 1, trained on day 2.
        let p = problem(
            vec![
                Day::open(1, 8, 16, 1000.0).with_skill("Register"),
                Day::open(2, 8, 16, 1000.0).with_skill("Register"),
            ],
            vec![
                Employee::new(1, 40, 10.0).with_learning_rate(125.0),
                Employee::new(2, 40, 11.0).with_learning_rate(125.0),
            ],
        );
        let (s, state) = GreedyScheduler::new().schedule_with_state(&p).unwrap();
        assert_eq!(s.shifts_for_day(1).len(), 2);
        // Both trained now; the cheaper one works alone.
        assert_eq!(staff(&s, 2), vec![(1, "Register".into())]);
        assert!(state.is_trained(1, "Register"));
        assert!(state.is_trained(2, "Register"));
    }

    #[test]
    fn test_custom_ranking() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register")],
            vec![
                Employee::new(1, 40, 20.0).with_skill("Register"),
                Employee::new(2, 40, 5.0),
                Employee::new(3, 40, 6.0),
            ],
        );
        let s = GreedyScheduler::new()
            .with_ranking(RankingEngine::cost_first())
            .schedule(&p)
            .unwrap();
        // Top candidate is untrained → the two cheapest untrained pair up.
        assert_eq!(
            staff(&s, 1),
            vec![(2, "Register".into()), (3, "Register".into())]
        );

        let s = GreedyScheduler::new()
            .with_ranking(RankingEngine::learner_first())
            .schedule(&p)
            .unwrap();
        assert_eq!(staff(&s, 1), vec![(1, "Register".into())]);
    }

    #[test]
    fn test_learner_first_pairs_fastest_learners() {
        let p = problem(
            vec![Day::open(1, 8, 16, 1000.0).with_skill("Register")],
            vec![
                Employee::new(1, 40, 5.0).with_learning_rate(1.0),
                Employee::new(2, 40, 30.0).with_learning_rate(90.0),
                Employee::new(3, 40, 6.0).with_learning_rate(2.0),
                Employee::new(4, 40, 25.0).with_learning_rate(60.0),
            ],
        );
        let (s, state) = GreedyScheduler::new()
            .with_ranking(RankingEngine::learner_first())
            .schedule_with_state(&p)
            .unwrap();
        assert_eq!(
            staff(&s, 1),
            vec![(2, "Register".into()), (4, "Register".into())]
        );
        // 8 hours × 90 points with the default bonus of 1.
        assert!((state.points(2, "Register") - 720.0).abs() < 1e-10);

        // The standard ranking pairs the two cheapest instead.
        let s = GreedyScheduler::new().schedule(&p).unwrap();
        assert_eq!(
            staff(&s, 1),
            vec![(1, "Register".into()), (3, "Register".into())]
        );
    }

    #[test]
    fn test_state_matches_simulation() {
        let p = problem(
            (1..=9)
                .map(|id| {
                    if id % 4 == 0 {
                        Day::closed(id)
                    } else {
                        Day::open(id, 9, 17, 800.0).with_skills(["Register", "Grill"])
                    }
                })
                .collect(),
            vec![
                Employee::new(1, 20, 10.0).with_skill("Register").with_teaching_rate(2.0),
                Employee::new(2, 20, 9.0).with_learning_rate(60.0),
                Employee::new(3, 30, 11.0).with_learning_rate(80.0).with_vacation(2),
                Employee::new(4, 30, 14.0).with_skill("Grill"),
            ],
        );
        let (s, state) = GreedyScheduler::new().schedule_with_state(&p).unwrap();
        assert!(validate_schedule(&s, &p).is_ok());
        let replay = Simulator::new(&p).run(&s).unwrap();
        assert_eq!(replay.final_state, state);
    }
}

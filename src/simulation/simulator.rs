//! Hour-by-hour coverage, training, and payroll replay.
//!
//! # Algorithm
//!
//! Days are visited in ascending id order. A block week begins on days
//! `1, 1+7, 1+14, ...`; every weekly counter is zeroed before such a day
//! is processed. For each open hour `h`:
//!
//! 1. Apply promotions staged during `h - 1`.
//! 2. Split the workers on each required skill into trained/untrained and
//!    add the skill's [`Coverage`] to the day's achieved skill-hours.
//! 3. Untrained workers gain `learning_rate × teacher_bonus` points, the
//!    bonus being the best teaching rate among trained co-workers on the
//!    same skill (default 1). Crossing the threshold stages a promotion
//!    for `h + 1`.
//! 4. Every active worker bills one hour, at base rate below the weekly
//!    cap and at the floored overtime rate past it.
//!
//! Day profit is `revenue × capacity² − payroll − fixed_cost`, or just
//! `−fixed_cost` for a closed day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{payroll, Coverage, SimulationState};
use crate::error::SimulationError;
use crate::models::{Day, DayId, Employee, EmployeeId, Problem, Schedule, Shift};

/// Outcome of one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    /// Day id.
    pub day_id: DayId,
    /// Whether the day was open.
    pub is_open: bool,
    /// Sum of per-hour, per-skill coverage.
    pub achieved_skill_hours: f64,
    /// `open_hours × |required_skills|`.
    pub required_skill_hours: u32,
    /// `achieved / required` (0 when nothing is required).
    pub capacity: f64,
    /// `revenue_potential × capacity²`.
    pub revenue: f64,
    /// Wages billed for the day.
    pub payroll: f64,
    /// Hours billed at the overtime rate.
    pub overtime_hours: u32,
    /// Fixed daily cost charged.
    pub fixed_cost: f64,
    /// `revenue − payroll − fixed_cost`.
    pub profit: f64,
    /// Employees who became trained in a skill during the day.
    pub promotions: usize,
}

impl DayReport {
    fn closed(day: &Day, fixed_cost: f64) -> Self {
        Self {
            day_id: day.id,
            is_open: false,
            achieved_skill_hours: 0.0,
            required_skill_hours: 0,
            capacity: 0.0,
            revenue: 0.0,
            payroll: 0.0,
            overtime_hours: 0,
            fixed_cost,
            profit: -fixed_cost,
            promotions: 0,
        }
    }

    /// Required skill-hours left uncovered.
    pub fn uncovered_skill_hours(&self) -> f64 {
        (self.required_skill_hours as f64 - self.achieved_skill_hours).max(0.0)
    }
}

/// Result of replaying a whole schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One report per day of the horizon, in day order.
    pub days: Vec<DayReport>,
    /// Sum of daily profits.
    pub total_score: f64,
    /// Training and hour counters after the last day.
    pub final_state: SimulationState,
}

impl SimulationResult {
    /// Daily profits in day order.
    pub fn per_day_profit(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.profit).collect()
    }

    /// Report for one day.
    pub fn day(&self, day_id: DayId) -> Option<&DayReport> {
        self.days.iter().find(|d| d.day_id == day_id)
    }
}

/// Authoritative schedule scorer.
///
/// Side-effect free with respect to the problem: every run works on its
/// own [`SimulationState`].
///
/// # Example
///
/// ```
/// use shift_planner::models::{Day, Employee, Organization, Problem, Schedule, Shift};
/// use shift_planner::simulation::Simulator;
///
/// let problem = Problem::new(
///     Organization::new(50, 100.0),
///     vec![Day::open(1, 8, 10, 1000.0).with_skill("Register")],
///     vec![Employee::new(1, 40, 10.0).with_skill("Register")],
/// );
/// let mut schedule = Schedule::new();
/// schedule.add_shift(Shift::new(1, 1, 8, 10, "Register"));
///
/// let result = Simulator::new(&problem).run(&schedule).unwrap();
/// assert!((result.total_score - 880.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    problem: &'a Problem,
}

impl<'a> Simulator<'a> {
    /// Creates a simulator for a problem.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Replays a schedule from fresh state.
    pub fn run(&self, schedule: &Schedule) -> Result<SimulationResult, SimulationError> {
        self.run_from(schedule, SimulationState::fresh(self.problem))
    }

    /// Replays a schedule starting from a caller-owned state snapshot.
    ///
    /// The snapshot is consumed and returned evolved in the result.
    pub fn run_from(
        &self,
        schedule: &Schedule,
        mut state: SimulationState,
    ) -> Result<SimulationResult, SimulationError> {
        if let Some((day_id, _)) = schedule
            .iter()
            .find(|(id, _)| self.problem.day(*id).is_none())
        {
            return Err(SimulationError::UnknownDay { day_id });
        }

        let mut days: Vec<&Day> = self.problem.days.iter().collect();
        days.sort_by_key(|d| d.id);

        let mut reports = Vec::with_capacity(days.len());
        for day in days {
            let report = self.advance_day(day, schedule.shifts_for_day(day.id), &mut state)?;
            reports.push(report);
        }

        let total_score = reports.iter().map(|r| r.profit).sum();
        log::debug!(
            "simulated {} days, total score {:.2}",
            reports.len(),
            total_score
        );

        Ok(SimulationResult {
            days: reports,
            total_score,
            final_state: state,
        })
    }

    /// Advances the state through one day with the given shifts.
    ///
    /// Days must be fed in ascending id order. Equivalent to
    /// [`begin_day`](Self::begin_day) followed by
    /// [`replay_day`](Self::replay_day).
    pub fn advance_day(
        &self,
        day: &Day,
        shifts: &[Shift],
        state: &mut SimulationState,
    ) -> Result<DayReport, SimulationError> {
        self.begin_day(day, state);
        self.replay_day(day, shifts, state)
    }

    /// Zeroes weekly hour counters if the day starts a block week.
    ///
    /// Idempotent for a given day.
    pub fn begin_day(&self, day: &Day, state: &mut SimulationState) {
        if day.is_week_start(self.problem.config.week_length_days) {
            log::trace!("day {}: new block week", day.id);
            state.reset_week();
        }
    }

    /// Replays the hours of one day on `state`.
    ///
    /// This is the single implementation of the coverage, training, and
    /// payroll rules; the greedy scheduler commits its days through it.
    /// Callers must have run [`begin_day`](Self::begin_day) for this day.
    pub fn replay_day(
        &self,
        day: &Day,
        shifts: &[Shift],
        state: &mut SimulationState,
    ) -> Result<DayReport, SimulationError> {
        let config = &self.problem.config;
        let org = &self.problem.organization;

        if !day.is_open {
            return Ok(DayReport::closed(day, org.fixed_daily_cost));
        }

        self.check_shifts(day, shifts)?;

        let mut skills: Vec<&str> = Vec::with_capacity(day.required_skills.len());
        for skill in &day.required_skills {
            if !skills.contains(&skill.as_str()) {
                skills.push(skill);
            }
        }

        let mut achieved = 0.0;
        let mut payroll_total = 0.0;
        let mut overtime_hours = 0;
        let mut promotions = 0;
        let mut staged: BTreeSet<(EmployeeId, &str)> = BTreeSet::new();

        for hour in day.hours() {
            promotions += apply_promotions(&mut staged, state, hour);

            let active: Vec<&Shift> = shifts.iter().filter(|s| s.is_active_at(hour)).collect();

            for &skill in &skills {
                let (trained, untrained): (Vec<&Shift>, Vec<&Shift>) = active
                    .iter()
                    .copied()
                    .filter(|s| s.skill == skill)
                    .partition(|s| state.is_trained(s.employee_id, skill));

                achieved += Coverage::from_staff(trained.len(), untrained.len()).value();

                if untrained.is_empty() {
                    continue;
                }

                let teacher_bonus = trained
                    .iter()
                    .filter_map(|s| self.problem.employee(s.employee_id))
                    .map(|e| e.teaching_rate)
                    .fold(None, |best: Option<f64>, r| Some(best.map_or(r, |b| b.max(r))))
                    .unwrap_or(config.default_teacher_bonus);

                for shift in untrained {
                    let employee = self.employee(shift)?;
                    let gained = employee.learning_rate * teacher_bonus;
                    let entry = state.employee_mut(employee.id).ok_or(
                        SimulationError::UnknownEmployee {
                            employee_id: employee.id,
                            day_id: day.id,
                        },
                    )?;
                    let total = entry.training_points.entry(skill.to_string()).or_insert(0.0);
                    *total += gained;
                    if *total >= config.training_threshold {
                        staged.insert((employee.id, skill));
                    }
                }
            }

            let mut billed: BTreeSet<EmployeeId> = BTreeSet::new();
            for shift in &active {
                if !billed.insert(shift.employee_id) {
                    continue;
                }
                let employee = self.employee(shift)?;
                let entry = state.employee_mut(employee.id).ok_or(
                    SimulationError::UnknownEmployee {
                        employee_id: employee.id,
                        day_id: day.id,
                    },
                )?;
                if payroll::is_overtime(employee, entry.weekly_hours_used) {
                    overtime_hours += 1;
                }
                payroll_total += payroll::hourly_cost(employee, entry.weekly_hours_used, org);
                entry.weekly_hours_used += 1;
            }
        }

        promotions += apply_promotions(&mut staged, state, day.end);

        let required = day.total_required_skill_hours();
        let capacity = if required == 0 {
            0.0
        } else {
            achieved / required as f64
        };
        let revenue = day.revenue_potential * capacity * capacity;
        let profit = revenue - payroll_total - org.fixed_daily_cost;

        log::debug!(
            "day {}: capacity {:.3}, payroll {:.2}, profit {:.2}",
            day.id,
            capacity,
            payroll_total,
            profit
        );

        Ok(DayReport {
            day_id: day.id,
            is_open: true,
            achieved_skill_hours: achieved,
            required_skill_hours: required,
            capacity,
            revenue,
            payroll: payroll_total,
            overtime_hours,
            fixed_cost: org.fixed_daily_cost,
            profit,
            promotions,
        })
    }

    fn employee(&self, shift: &Shift) -> Result<&'a Employee, SimulationError> {
        self.problem
            .employee(shift.employee_id)
            .ok_or(SimulationError::UnknownEmployee {
                employee_id: shift.employee_id,
                day_id: shift.day_id,
            })
    }

    fn check_shifts(&self, day: &Day, shifts: &[Shift]) -> Result<(), SimulationError> {
        for shift in shifts {
            if shift.day_id != day.id {
                return Err(SimulationError::DayMismatch {
                    listed_day: day.id,
                    shift_day: shift.day_id,
                });
            }
            self.employee(shift)?;
            if !day.requires(&shift.skill) {
                return Err(SimulationError::UnknownSkill {
                    employee_id: shift.employee_id,
                    day_id: day.id,
                    skill: shift.skill.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Applies staged promotions; returns how many took effect.
fn apply_promotions(
    staged: &mut BTreeSet<(EmployeeId, &str)>,
    state: &mut SimulationState,
    hour: u32,
) -> usize {
    let mut applied = 0;
    for (id, skill) in std::mem::take(staged) {
        if let Some(entry) = state.employee_mut(id) {
            if entry.trained.insert(skill.to_string()) {
                log::trace!("employee {id} trained in '{skill}' from hour {hour}");
                applied += 1;
            }
        }
    }
    applied
}

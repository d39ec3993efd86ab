//! Schedule (solution) model.
//!
//! A schedule maps every day of the horizon to either a closed marker or
//! an ordered list of shifts. It is built once and then read by the
//! validator and the simulator; a different candidate is a new schedule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DayId, EmployeeId, Shift};

/// Plan for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DayPlan {
    /// Explicit closed/empty marker.
    Closed,
    /// Shifts worked that day, in insertion order.
    Shifts(Vec<Shift>),
}

/// A complete schedule over the planning horizon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Day id → plan, ordered by day id.
    pub days: BTreeMap<DayId, DayPlan>,
}

impl DayPlan {
    /// Shifts in this plan (empty when closed).
    pub fn shifts(&self) -> &[Shift] {
        match self {
            DayPlan::Closed => &[],
            DayPlan::Shifts(shifts) => shifts,
        }
    }

    /// Whether the plan is the closed marker.
    pub fn is_closed(&self) -> bool {
        matches!(self, DayPlan::Closed)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a day closed, discarding any shifts already listed for it.
    pub fn set_closed(&mut self, day_id: DayId) {
        self.days.insert(day_id, DayPlan::Closed);
    }

    /// Adds a shift under its own day.
    ///
    /// A closed marker on that day is replaced by a shift list; the
    /// validator then reports the shift if the day really is closed.
    pub fn add_shift(&mut self, shift: Shift) {
        let plan = self
            .days
            .entry(shift.day_id)
            .or_insert_with(|| DayPlan::Shifts(Vec::new()));
        match plan {
            DayPlan::Shifts(shifts) => shifts.push(shift),
            DayPlan::Closed => *plan = DayPlan::Shifts(vec![shift]),
        }
    }

    /// Sets the full plan for a day.
    pub fn set_plan(&mut self, day_id: DayId, plan: DayPlan) {
        self.days.insert(day_id, plan);
    }

    /// Shifts for a day (empty if unlisted or closed).
    pub fn shifts_for_day(&self, day_id: DayId) -> &[Shift] {
        self.days.get(&day_id).map(DayPlan::shifts).unwrap_or(&[])
    }

    /// Whether a day carries the closed marker.
    pub fn is_closed(&self, day_id: DayId) -> bool {
        self.days.get(&day_id).is_some_and(DayPlan::is_closed)
    }

    /// All shifts of one employee across the horizon, in day order.
    pub fn shifts_for_employee(&self, employee_id: EmployeeId) -> Vec<&Shift> {
        self.iter_shifts()
            .filter(|s| s.employee_id == employee_id)
            .collect()
    }

    /// Iterates `(day_id, plan)` in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (DayId, &DayPlan)> {
        self.days.iter().map(|(&id, plan)| (id, plan))
    }

    /// Iterates every shift in day order.
    pub fn iter_shifts(&self) -> impl Iterator<Item = &Shift> {
        self.days.values().flat_map(DayPlan::shifts)
    }

    /// Total number of shifts.
    pub fn shift_count(&self) -> usize {
        self.days.values().map(|p| p.shifts().len()).sum()
    }

    /// Total employee-hours scheduled.
    pub fn total_hours(&self) -> u32 {
        self.iter_shifts().map(Shift::duration).sum()
    }

    /// Presentation copy with contiguous shifts merged.
    ///
    /// Shifts of the same employee, day, and skill where one ends exactly
    /// when the next starts become a single shift. Shifts within a day are
    /// reordered by `(employee_id, start)`. Scoring never goes through
    /// this; the merged schedule scores the same as the original.
    pub fn compacted(&self) -> Schedule {
        let mut out = Schedule::new();
        for (&day_id, plan) in &self.days {
            let merged = match plan {
                DayPlan::Closed => DayPlan::Closed,
                DayPlan::Shifts(shifts) => {
                    let mut sorted = shifts.clone();
                    sorted.sort_by_key(|s| (s.employee_id, s.start));

                    let mut merged: Vec<Shift> = Vec::with_capacity(sorted.len());
                    for shift in sorted {
                        match merged.last_mut() {
                            Some(prev)
                                if prev.employee_id == shift.employee_id
                                    && prev.skill == shift.skill
                                    && prev.end == shift.start =>
                            {
                                prev.end = shift.end;
                            }
                            _ => merged.push(shift),
                        }
                    }
                    DayPlan::Shifts(merged)
                }
            };
            out.days.insert(day_id, merged);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_shift(Shift::new(1, 1, 8, 12, "Register"));
        s.add_shift(Shift::new(2, 1, 8, 16, "Grill"));
        s.set_closed(2);
        s.add_shift(Shift::new(1, 3, 9, 11, "Register"));
        s
    }

    #[test]
    fn test_shift_lookup() {
        let s = sample_schedule();
        assert_eq!(s.shifts_for_day(1).len(), 2);
        assert!(s.shifts_for_day(2).is_empty());
        assert!(s.shifts_for_day(99).is_empty());
        assert_eq!(s.shifts_for_employee(1).len(), 2);
        assert_eq!(s.shift_count(), 3);
        assert_eq!(s.total_hours(), 4 + 8 + 2);
    }

    #[test]
    fn test_closed_marker() {
        let s = sample_schedule();
        assert!(s.is_closed(2));
        assert!(!s.is_closed(1));
        assert!(!s.is_closed(99));
    }

    #[test]
    fn test_add_shift_replaces_closed_marker() {
        let mut s = Schedule::new();
        s.set_closed(1);
        s.add_shift(Shift::new(1, 1, 8, 9, "Register"));
        assert!(!s.is_closed(1));
        assert_eq!(s.shifts_for_day(1).len(), 1);
    }

    #[test]
    fn test_iter_in_day_order() {
        let s = sample_schedule();
        let ids: Vec<DayId> = s.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_compacted_merges_contiguous() {
        let mut s = Schedule::new();
        s.add_shift(Shift::new(1, 1, 8, 9, "Register"));
        s.add_shift(Shift::new(2, 1, 8, 9, "Register"));
        s.add_shift(Shift::new(1, 1, 9, 10, "Register"));
        s.add_shift(Shift::new(1, 1, 10, 11, "Grill"));
        s.add_shift(Shift::new(1, 1, 12, 13, "Grill"));
        s.set_closed(2);

        let c = s.compacted();
        let day = c.shifts_for_day(1);
        assert_eq!(
            day,
            &[
                Shift::new(1, 1, 8, 10, "Register"),
                Shift::new(1, 1, 10, 11, "Grill"),
                Shift::new(1, 1, 12, 13, "Grill"),
                Shift::new(2, 1, 8, 9, "Register"),
            ]
        );
        assert!(c.is_closed(2));
        assert_eq!(c.total_hours(), s.total_hours());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.shift_count(), 0);
        assert_eq!(s.total_hours(), 0);
        assert!(s.iter_shifts().next().is_none());
    }
}

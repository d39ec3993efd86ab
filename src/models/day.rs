//! Planning day model.
//!
//! Days are numbered densely from 1 across the whole horizon. An open day
//! has an hour window `[start, end)` and a list of required skills, each
//! of which is one unit of demand for every open hour.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Day identifier (1-based, dense, sequential).
pub type DayId = u32;

/// A day of the planning horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Day id, starting at 1.
    pub id: DayId,
    /// Whether the business operates on this day.
    pub is_open: bool,
    /// Opening hour (inclusive). Ignored when closed.
    pub start: u32,
    /// Closing hour (exclusive). Ignored when closed.
    pub end: u32,
    /// Revenue earned at full capacity.
    pub revenue_potential: f64,
    /// Skills needed every open hour, in priority order.
    pub required_skills: Vec<String>,
}

impl Day {
    /// Creates an open day with window `[start, end)`.
    pub fn open(id: DayId, start: u32, end: u32, revenue_potential: f64) -> Self {
        Self {
            id,
            is_open: true,
            start,
            end,
            revenue_potential,
            required_skills: Vec::new(),
        }
    }

    /// Creates a closed day.
    pub fn closed(id: DayId) -> Self {
        Self {
            id,
            is_open: false,
            start: 0,
            end: 0,
            revenue_potential: 0.0,
            required_skills: Vec::new(),
        }
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Adds several required skills, keeping their order.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    /// Number of open hours (0 when closed).
    pub fn open_hours(&self) -> u32 {
        if self.is_open {
            self.end.saturating_sub(self.start)
        } else {
            0
        }
    }

    /// Open hours as a range (empty when closed).
    pub fn hours(&self) -> Range<u32> {
        if self.is_open {
            self.start..self.end
        } else {
            0..0
        }
    }

    /// `open_hours × |required_skills|`.
    pub fn total_required_skill_hours(&self) -> u32 {
        self.open_hours() * self.required_skills.len() as u32
    }

    /// Whether the day requires a given skill.
    pub fn requires(&self, skill: &str) -> bool {
        self.required_skills.iter().any(|s| s == skill)
    }

    /// Whether `[start, end)` lies inside the open window.
    pub fn contains_window(&self, start: u32, end: u32) -> bool {
        self.is_open && start >= self.start && end <= self.end
    }

    /// Whether this day begins a block week (days 1, 1+len, 1+2·len, ...).
    pub fn is_week_start(&self, week_length_days: u32) -> bool {
        let len = week_length_days.max(1);
        self.id >= 1 && (self.id - 1) % len == 0
    }
}

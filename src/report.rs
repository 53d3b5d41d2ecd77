//! Plain-text schedule report.
//!
//! One line per activity:
//!
//! ```text
//! SLA100A: Room - Loft 206, Facilitator - Glen, Time - 10 AM
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Problem, Schedule};

/// A schedule resolved against its problem for display.
#[derive(Debug, Clone)]
pub struct ScheduleReport<'a> {
    problem: &'a Problem,
    schedule: &'a Schedule,
}

impl<'a> ScheduleReport<'a> {
    /// Creates a report.
    pub fn new(problem: &'a Problem, schedule: &'a Schedule) -> Self {
        Self { problem, schedule }
    }

    /// Report lines, one per record that resolves against the problem.
    pub fn lines(&self) -> Vec<String> {
        self.schedule
            .iter()
            .filter_map(|a| self.problem.resolve(a))
            .map(|(activity, room, facilitator, timeslot)| {
                format!(
                    "{}: Room - {}, Facilitator - {}, Time - {}",
                    activity.name, room.name, facilitator.name, timeslot.label
                )
            })
            .collect()
    }

    /// Writes the report to a file, one line per activity.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

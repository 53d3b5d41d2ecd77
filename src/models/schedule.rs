//! Schedule (candidate solution) model.
//!
//! A schedule is one complete placement of every activity. Each placement is
//! an [`Assignment`] of indices into the problem's reference pools. Records are
//! `Copy` values owned by the schedule, so cloning a schedule or splicing two
//! of them together never shares mutable state between candidates.

use serde::{Deserialize, Serialize};

/// Placement of one activity: indices into the problem's pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Index into `Problem::activities`.
    pub activity: usize,
    /// Index into `Problem::rooms`.
    pub room: usize,
    /// Index into `Problem::facilitators`.
    pub facilitator: usize,
    /// Index into `Problem::timeslots`.
    pub timeslot: usize,
}

/// A complete candidate schedule.
///
/// `assignments[i]` places activity `i` (canonical activity order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// One record per activity, in canonical order.
    pub assignments: Vec<Assignment>,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(activity: usize, room: usize, facilitator: usize, timeslot: usize) -> Self {
        Self {
            activity,
            room,
            facilitator,
            timeslot,
        }
    }

    /// Same room in the same timeslot.
    #[inline]
    pub fn collides_with(&self, other: &Assignment) -> bool {
        self.room == other.room && self.timeslot == other.timeslot
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from assignment records.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignment records.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no records.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over the assignment records.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// Number of other records sharing room and timeslot with the record
    /// at `index`.
    pub fn collisions_with(&self, index: usize) -> usize {
        let Some(target) = self.assignments.get(index) else {
            return 0;
        };
        self.assignments
            .iter()
            .enumerate()
            .filter(|(i, a)| *i != index && a.collides_with(target))
            .count()
    }

    /// Number of records led by `facilitator` in `timeslot`.
    pub fn facilitator_load(&self, facilitator: usize, timeslot: usize) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.facilitator == facilitator && a.timeslot == timeslot)
            .count()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

//! Problem definition: the immutable reference data of a run.

use serde::{Deserialize, Serialize};

use super::{Activity, Assignment, Facilitator, Room, Schedule, Timeslot};
use crate::error::{Result, ScheduleError};

/// Facilitator exempt from the light-load penalty unless overridden.
pub const DEFAULT_EXEMPT_FACILITATOR: &str = "Dr. Tyler";

fn default_exempt() -> Option<String> {
    Some(DEFAULT_EXEMPT_FACILITATOR.to_string())
}

/// Activities and the pools they are placed from.
///
/// Built once, then shared read-only by every schedule in every generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Activities in canonical order.
    pub activities: Vec<Activity>,
    pub rooms: Vec<Room>,
    pub facilitators: Vec<Facilitator>,
    pub timeslots: Vec<Timeslot>,
    /// Facilitator not penalized for carrying only one or two activities in
    /// a timeslot. `None` exempts nobody.
    #[serde(default = "default_exempt")]
    pub exempt_facilitator: Option<String>,
}

impl Default for Problem {
    fn default() -> Self {
        Self {
            activities: Vec::new(),
            rooms: Vec::new(),
            facilitators: Vec::new(),
            timeslots: Vec::new(),
            exempt_facilitator: default_exempt(),
        }
    }
}

impl Problem {
    /// Creates an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a facilitator.
    pub fn with_facilitator(mut self, facilitator: impl Into<Facilitator>) -> Self {
        self.facilitators.push(facilitator.into());
        self
    }

    /// Adds a timeslot.
    pub fn with_timeslot(mut self, timeslot: impl Into<Timeslot>) -> Self {
        self.timeslots.push(timeslot.into());
        self
    }

    /// Sets (or clears) the exempt facilitator.
    pub fn with_exempt_facilitator(mut self, name: Option<&str>) -> Self {
        self.exempt_facilitator = name.map(str::to_string);
        self
    }

    /// Fails fast when any pool a schedule draws from is empty.
    pub fn check_pools(&self) -> Result<()> {
        if self.rooms.is_empty() {
            return Err(ScheduleError::EmptyPool { kind: "room" });
        }
        if self.facilitators.is_empty() {
            return Err(ScheduleError::EmptyPool {
                kind: "facilitator",
            });
        }
        if self.timeslots.is_empty() {
            return Err(ScheduleError::EmptyPool { kind: "timeslot" });
        }
        Ok(())
    }

    /// Whether the named facilitator is exempt from the light-load penalty.
    pub fn is_exempt(&self, facilitator: &str) -> bool {
        self.exempt_facilitator.as_deref() == Some(facilitator)
    }

    /// Resolves a record to its reference entities.
    ///
    /// Returns `None` if any index is outside its pool.
    pub fn resolve(
        &self,
        assignment: &Assignment,
    ) -> Option<(&Activity, &Room, &Facilitator, &Timeslot)> {
        Some((
            self.activities.get(assignment.activity)?,
            self.rooms.get(assignment.room)?,
            self.facilitators.get(assignment.facilitator)?,
            self.timeslots.get(assignment.timeslot)?,
        ))
    }

    /// Whether the schedule places every activity exactly once, in canonical
    /// order, with every index inside its pool.
    pub fn is_complete(&self, schedule: &Schedule) -> bool {
        schedule.len() == self.activities.len()
            && schedule
                .iter()
                .enumerate()
                .all(|(i, a)| a.activity == i && self.resolve(a).is_some())
    }
}

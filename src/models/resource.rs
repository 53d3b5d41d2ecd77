//! Resource models: rooms, facilitators and timeslots.
//!
//! These are shared, read-only lookup data for the whole run. Nothing in the
//! engine writes to them; room capacity in particular is never adjusted as
//! activities are placed.

use serde::{Deserialize, Serialize};

/// A room that can host activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name (e.g. "Slater 003").
    pub name: String,
    /// Declared seating capacity.
    pub capacity: u32,
}

/// A person who can lead activities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facilitator {
    /// Unique facilitator name, matched against activity preference lists.
    pub name: String,
}

/// A time-of-day slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeslot {
    /// Display label (e.g. "10 AM").
    pub label: String,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// Whether the room seats `enrollment` students.
    #[inline]
    pub fn fits(&self, enrollment: u32) -> bool {
        self.capacity >= enrollment
    }
}

impl Facilitator {
    /// Creates a facilitator.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Timeslot {
    /// Creates a timeslot.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl From<&str> for Facilitator {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Timeslot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

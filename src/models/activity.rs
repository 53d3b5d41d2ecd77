//! Activity model.
//!
//! An activity is a course section that needs a room, a facilitator and a
//! timeslot. The activity itself is reference data; where it is placed lives
//! in each candidate schedule's [`Assignment`](super::Assignment) records.

use serde::{Deserialize, Serialize};

/// A course section to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity name (e.g. "SLA100A").
    pub name: String,
    /// Number of students expected to attend.
    pub expected_enrollment: u32,
    /// Facilitators the activity would ideally be led by.
    #[serde(default)]
    pub preferred_facilitators: Vec<String>,
    /// Facilitators who can lead the activity but are not preferred.
    #[serde(default)]
    pub other_facilitators: Vec<String>,
}

/// How well a facilitator matches an activity's wishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilitatorPreference {
    /// Listed in the activity's preferred facilitators.
    Preferred,
    /// Listed in the activity's other facilitators.
    Other,
    /// Not associated with the activity.
    Unrelated,
}

impl Activity {
    /// Creates an activity with no facilitator preferences.
    pub fn new(name: impl Into<String>, expected_enrollment: u32) -> Self {
        Self {
            name: name.into(),
            expected_enrollment,
            preferred_facilitators: Vec::new(),
            other_facilitators: Vec::new(),
        }
    }

    /// Appends preferred facilitators.
    pub fn with_preferred<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_facilitators
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Appends acceptable but not preferred facilitators.
    pub fn with_others<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_facilitators.extend(names.into_iter().map(Into::into));
        self
    }

    /// Classifies a facilitator by name. Preferred wins over other.
    pub fn preference_for(&self, facilitator: &str) -> FacilitatorPreference {
        if self.preferred_facilitators.iter().any(|f| f == facilitator) {
            FacilitatorPreference::Preferred
        } else if self.other_facilitators.iter().any(|f| f == facilitator) {
            FacilitatorPreference::Other
        } else {
            FacilitatorPreference::Unrelated
        }
    }
}

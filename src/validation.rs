//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the reference data before a run.
//! Detects:
//! - Empty room, facilitator or timeslot pools
//! - Duplicate names
//! - Activities with zero expected enrollment
//! - Rooms with zero capacity
//!
//! Facilitator names in an activity's preference lists need not exist in the
//! facilitator pool; such names simply never match.

use std::collections::HashSet;
use std::fmt;

use crate::models::Problem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A pool schedules draw from has no entries.
    EmptyPool,
    /// Two entities of the same kind share a name.
    DuplicateName,
    /// An activity expects no students.
    InvalidEnrollment,
    /// A room seats nobody.
    InvalidCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the reference data of a problem.
///
/// Checks:
/// 1. Rooms, facilitators and timeslots are non-empty
/// 2. No duplicate activity, room, facilitator or timeslot names
/// 3. Every activity expects at least one student
/// 4. Every room seats at least one student
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    for (kind, len) in [
        ("room", problem.rooms.len()),
        ("facilitator", problem.facilitators.len()),
        ("timeslot", problem.timeslots.len()),
    ] {
        if len == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPool,
                format!("No {kind}s defined"),
            ));
        }
    }

    check_unique("activity", problem.activities.iter().map(|a| a.name.as_str()), &mut errors);
    check_unique("room", problem.rooms.iter().map(|r| r.name.as_str()), &mut errors);
    check_unique(
        "facilitator",
        problem.facilitators.iter().map(|f| f.name.as_str()),
        &mut errors,
    );
    check_unique(
        "timeslot",
        problem.timeslots.iter().map(|t| t.label.as_str()),
        &mut errors,
    );

    for activity in &problem.activities {
        if activity.expected_enrollment == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEnrollment,
                format!("Activity '{}' has zero expected enrollment", activity.name),
            ));
        }
    }

    for room in &problem.rooms {
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Room '{}' has zero capacity", room.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate {kind} name: {name}"),
            ));
        }
    }
}

//! Soft-constraint fitness of a schedule.
//!
//! Every activity contributes four additive terms; the schedule's fitness is
//! their sum over all activities. Higher is better and no normalization is
//! applied.
//!
//! | Term | Rule |
//! |------|------|
//! | Double booking | −0.5 if another activity shares room and timeslot |
//! | Room fit | −0.5 too small, +0.3 up to 3×, −0.2 up to 6×, −0.4 beyond |
//! | Facilitator preference | +0.5 preferred, +0.2 other, −0.1 unrelated |
//! | Facilitator load | see [`facilitator_load_score`] |
//!
//! Evaluation is pure: it reads the schedule and the reference data and
//! writes nothing.

use crate::models::{FacilitatorPreference, Problem, Schedule};

const DOUBLE_BOOKING_PENALTY: f64 = -0.5;

/// Per-activity breakdown of the fitness terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityScore {
    /// Another activity shares this activity's room and timeslot.
    pub double_booked: bool,
    /// Room capacity against expected enrollment.
    pub room_fit: f64,
    /// Facilitator preference term.
    pub facilitator_preference: f64,
    /// Facilitator load term for this activity's timeslot.
    pub facilitator_load: f64,
}

impl ActivityScore {
    /// Sum of all terms.
    pub fn total(&self) -> f64 {
        let booking = if self.double_booked {
            DOUBLE_BOOKING_PENALTY
        } else {
            0.0
        };
        booking + self.room_fit + self.facilitator_preference + self.facilitator_load
    }
}

/// Scores a room of `capacity` seats for `enrollment` students.
///
/// Bands are checked in order, each upper bound inclusive.
pub fn room_fit_score(capacity: u32, enrollment: u32) -> f64 {
    let capacity = u64::from(capacity);
    let enrollment = u64::from(enrollment);
    if capacity < enrollment {
        -0.5
    } else if capacity <= 3 * enrollment {
        0.3
    } else if capacity <= 6 * enrollment {
        -0.2
    } else {
        -0.4
    }
}

/// Scores a facilitator preference class.
pub fn preference_score(preference: FacilitatorPreference) -> f64 {
    match preference {
        FacilitatorPreference::Preferred => 0.5,
        FacilitatorPreference::Other => 0.2,
        FacilitatorPreference::Unrelated => -0.1,
    }
}

/// Scores a facilitator leading `load` activities in one timeslot.
///
/// The base term is +0.2 for exactly one activity and −0.2 for more. On top
/// of that, more than four activities cost another 0.5, and a non-exempt
/// facilitator with one or two activities costs another 0.4. The terms stack:
/// a non-exempt facilitator with a single activity nets −0.2.
pub fn facilitator_load_score(load: usize, exempt: bool) -> f64 {
    let mut score = match load {
        0 => 0.0,
        1 => 0.2,
        _ => -0.2,
    };
    if load > 4 {
        score -= 0.5;
    } else if matches!(load, 1 | 2) && !exempt {
        score -= 0.4;
    }
    score
}

/// Scores the record at `index`.
///
/// Returns `None` if `index` is out of range or the record points outside
/// the problem's pools.
pub fn activity_score(
    problem: &Problem,
    schedule: &Schedule,
    index: usize,
) -> Option<ActivityScore> {
    let assignment = schedule.assignments.get(index)?;
    let (activity, room, facilitator, _) = problem.resolve(assignment)?;

    let load = schedule.facilitator_load(assignment.facilitator, assignment.timeslot);

    Some(ActivityScore {
        double_booked: schedule.collisions_with(index) > 0,
        room_fit: room_fit_score(room.capacity, activity.expected_enrollment),
        facilitator_preference: preference_score(activity.preference_for(&facilitator.name)),
        facilitator_load: facilitator_load_score(load, problem.is_exempt(&facilitator.name)),
    })
}

/// Breakdown for every record of the schedule.
pub fn activity_scores(problem: &Problem, schedule: &Schedule) -> Vec<ActivityScore> {
    (0..schedule.len())
        .filter_map(|i| activity_score(problem, schedule, i))
        .collect()
}

/// Total fitness of a schedule (higher is better).
pub fn fitness(problem: &Problem, schedule: &Schedule) -> f64 {
    activity_scores(problem, schedule)
        .iter()
        .map(ActivityScore::total)
        .sum()
}

/// Constraint counts for a schedule.
///
/// A reporting view over the same rules the fitness function scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessSummary {
    /// Total fitness.
    pub fitness: f64,
    /// Activities sharing room and timeslot with another activity.
    pub double_booked: usize,
    /// Activities in a room smaller than their enrollment.
    pub undersized_rooms: usize,
    /// Activities in a room more than three times their enrollment.
    pub oversized_rooms: usize,
    /// Activities led by a preferred facilitator.
    pub preferred_facilitators: usize,
    /// Activities led by an acceptable, non-preferred facilitator.
    pub other_facilitators: usize,
    /// Activities led by a facilitator not associated with them.
    pub unrelated_facilitators: usize,
    /// Activities whose facilitator leads more than four activities in the
    /// same timeslot.
    pub overloaded: usize,
}

impl FitnessSummary {
    /// Computes the summary for a schedule.
    pub fn calculate(problem: &Problem, schedule: &Schedule) -> Self {
        let mut summary = Self::default();

        for (index, assignment) in schedule.iter().enumerate() {
            let Some(score) = activity_score(problem, schedule, index) else {
                continue;
            };
            let Some((activity, room, facilitator, _)) = problem.resolve(assignment) else {
                continue;
            };

            summary.fitness += score.total();
            if score.double_booked {
                summary.double_booked += 1;
            }
            if !room.fits(activity.expected_enrollment) {
                summary.undersized_rooms += 1;
            } else if u64::from(room.capacity) > 3 * u64::from(activity.expected_enrollment) {
                summary.oversized_rooms += 1;
            }
            match activity.preference_for(&facilitator.name) {
                FacilitatorPreference::Preferred => summary.preferred_facilitators += 1,
                FacilitatorPreference::Other => summary.other_facilitators += 1,
                FacilitatorPreference::Unrelated => summary.unrelated_facilitators += 1,
            }
            if schedule.facilitator_load(assignment.facilitator, assignment.timeslot) > 4 {
                summary.overloaded += 1;
            }
        }

        summary
    }

    /// No double bookings and no undersized rooms.
    pub fn is_feasible(&self) -> bool {
        self.double_booked == 0 && self.undersized_rooms == 0
    }
}

//! Timetabling domain models.
//!
//! Reference data ([`Activity`], [`Room`], [`Facilitator`], [`Timeslot`],
//! gathered in a [`Problem`]) is loaded once and never mutated. Candidate
//! solutions ([`Schedule`]) own their [`Assignment`] records.
//!
//! # Domain Mappings
//!
//! | u-timetable | Course scheduling | Exam scheduling |
//! |-------------|-------------------|-----------------|
//! | Activity | Course section | Exam sitting |
//! | Room | Lecture hall | Exam hall |
//! | Facilitator | Instructor | Invigilator |
//! | Timeslot | Class period | Exam session |
//! | Schedule | Timetable | Exam timetable |

mod activity;
mod problem;
mod resource;
mod schedule;

pub use activity::{Activity, FacilitatorPreference};
pub use problem::{Problem, DEFAULT_EXEMPT_FACILITATOR};
pub use resource::{Facilitator, Room, Timeslot};
pub use schedule::{Assignment, Schedule};

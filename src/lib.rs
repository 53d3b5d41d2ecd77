//! Course timetabling by genetic search.
//!
//! Maps a fixed set of course activities onto (room, facilitator, timeslot)
//! triples. A stochastic search evolves a population of candidate schedules
//! and returns the fittest one after a fixed number of generations.
//!
//! # Modules
//!
//! - **`models`**: Reference data (`Activity`, `Room`, `Facilitator`,
//!   `Timeslot`, `Problem`) and per-candidate state (`Assignment`, `Schedule`)
//! - **`fitness`**: Soft-constraint scoring of a schedule
//! - **`ga`**: Population initialization, selection, crossover, mutation and
//!   the generational driver
//! - **`validation`**: Input integrity checks (empty pools, duplicate names)
//! - **`loader`** / **`report`**: JSON input and the plain-text schedule report
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::models::{Activity, Problem, Room};
//!
//! let problem = Problem::new()
//!     .with_activity(Activity::new("SLA100A", 50).with_preferred(["Glen"]))
//!     .with_room(Room::new("Loft 206", 75))
//!     .with_facilitator("Glen")
//!     .with_timeslot("10 AM");
//!
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_num_generations(5)
//!     .with_seed(7);
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.best.len(), 1);
//! ```
//!
//! # Architecture
//!
//! Reference data is immutable for the whole run. Every schedule owns its
//! assignment records as plain values, so crossover and mutation on one
//! population member are never observable in another.

pub mod error;
pub mod fitness;
pub mod ga;
pub mod loader;
pub mod models;
pub mod report;
pub mod validation;

pub use error::{Result, ScheduleError};

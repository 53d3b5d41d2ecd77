//! Genetic search over timetables.
//!
//! # Encoding
//!
//! A chromosome is a [`Schedule`](crate::models::Schedule): one
//! `(room, facilitator, timeslot)` gene per activity, in canonical activity
//! order. Genes are plain index values, so offspring never share state with
//! their parents.
//!
//! # Loop
//!
//! 1. [`initial_population`]: uniformly random schedules
//! 2. [`Population::select`]: tournament sampling, weakest to strongest
//! 3. [`crossover`]: single point over the activity order
//! 4. [`mutate`]: per-activity point mutation
//! 5. [`GaRunner`]: full generational replacement for a fixed number of
//!    generations, then the fittest schedule of the last generation
//!
//! # Submodules
//!
//! - [`operators`]: crossover and mutation

mod config;
pub mod operators;
mod population;
mod runner;

pub use config::GaConfig;
pub use operators::{crossover, crossover_at, mutate, MutationField};
pub use population::{initial_population, random_schedule, Population};
pub use runner::{next_generation, GaResult, GaRunner, GenerationStats};

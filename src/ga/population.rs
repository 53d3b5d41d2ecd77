//! Population initialization and tournament sampling.

use rand::Rng;

use crate::error::Result;
use crate::fitness::fitness;
use crate::models::{Assignment, Problem, Schedule};

/// Draws a uniformly random room, facilitator and timeslot for every
/// activity.
///
/// Fails with [`ScheduleError::EmptyPool`](crate::ScheduleError::EmptyPool)
/// if any pool is empty.
pub fn random_schedule<R: Rng>(problem: &Problem, rng: &mut R) -> Result<Schedule> {
    problem.check_pools()?;
    Ok(draw_schedule(problem, rng))
}

/// Builds `size` independent random schedules.
pub fn initial_population<R: Rng>(
    problem: &Problem,
    size: usize,
    rng: &mut R,
) -> Result<Vec<Schedule>> {
    problem.check_pools()?;
    Ok((0..size).map(|_| draw_schedule(problem, rng)).collect())
}

// Pools must be non-empty.
fn draw_schedule<R: Rng>(problem: &Problem, rng: &mut R) -> Schedule {
    let assignments = (0..problem.activities.len())
        .map(|activity| {
            Assignment::new(
                activity,
                rng.random_range(0..problem.rooms.len()),
                rng.random_range(0..problem.facilitators.len()),
                rng.random_range(0..problem.timeslots.len()),
            )
        })
        .collect();
    Schedule::from_assignments(assignments)
}

/// Schedules of one generation with their cached fitness.
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<Schedule>,
    fitness: Vec<f64>,
}

impl Population {
    /// Scores every schedule once.
    pub fn evaluate(problem: &Problem, members: Vec<Schedule>) -> Self {
        let fitness = members.iter().map(|s| fitness(problem, s)).collect();
        Self { members, fitness }
    }

    /// Number of schedules.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Schedules in insertion order.
    pub fn members(&self) -> &[Schedule] {
        &self.members
    }

    /// Fitness values, parallel to [`members`](Self::members).
    pub fn fitness_values(&self) -> &[f64] {
        &self.fitness
    }

    /// Tournament sample: `k` members drawn uniformly with replacement,
    /// ordered weakest to strongest.
    ///
    /// The caller takes the last element as the tournament winner. Returns
    /// an empty vector for an empty population.
    pub fn select<R: Rng>(&self, k: usize, rng: &mut R) -> Vec<&Schedule> {
        if self.members.is_empty() {
            return Vec::new();
        }
        let mut picks: Vec<usize> = (0..k)
            .map(|_| rng.random_range(0..self.members.len()))
            .collect();
        picks.sort_by(|&a, &b| self.fitness[a].total_cmp(&self.fitness[b]));
        picks.into_iter().map(|i| &self.members[i]).collect()
    }

    /// Highest-fitness member. Ties keep the earliest member.
    pub fn best(&self) -> Option<(&Schedule, f64)> {
        self.best_index().map(|i| (&self.members[i], self.fitness[i]))
    }

    /// Consumes the population, returning its best member.
    pub fn into_best(mut self) -> Option<(Schedule, f64)> {
        let index = self.best_index()?;
        let fitness = self.fitness[index];
        Some((self.members.swap_remove(index), fitness))
    }

    fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, f) in self.fitness.iter().enumerate() {
            match best {
                Some(b) if self.fitness[b].total_cmp(f).is_ge() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Best, mean and worst fitness.
    pub fn stats(&self) -> Option<(f64, f64, f64)> {
        if self.fitness.is_empty() {
            return None;
        }
        let best = self.fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = self.fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = self.fitness.iter().sum::<f64>() / self.fitness.len() as f64;
        Some((best, mean, worst))
    }
}

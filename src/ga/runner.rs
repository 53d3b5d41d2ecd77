//! Generational driver.
//!
//! `INIT → EVOLVE(1..=num_generations) → REPORT`. Each generation is built
//! entirely from the previous one by tournament selection, single-point
//! crossover and point mutation, then replaces it wholesale.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::population::{initial_population, Population};
use crate::error::{Result, ScheduleError};
use crate::models::{Problem, Schedule};

/// Fitness statistics of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 0 for the initial population.
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Highest-fitness schedule of the final population.
    pub best: Schedule,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Generations evolved.
    pub generations: usize,
    /// Statistics for the initial population and every generation.
    pub history: Vec<GenerationStats>,
    /// Whether the stagnation limit ended the run.
    pub stopped_early: bool,
}

/// Runs the genetic search.
pub struct GaRunner;

impl GaRunner {
    /// Runs with an RNG seeded from `config.seed`, or from the OS.
    pub fn run(problem: &Problem, config: &GaConfig) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs with a caller-supplied RNG.
    pub fn run_with_rng<R: Rng>(
        problem: &Problem,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;

        info!(
            activities = problem.activities.len(),
            population = config.population_size,
            generations = config.num_generations,
            mutation_rate = config.mutation_rate,
            "starting timetable search"
        );

        let mut population = Population::evaluate(
            problem,
            initial_population(problem, config.population_size, rng)?,
        );
        let mut history = vec![stats_for(&population, 0)?];
        let mut best_seen = history[0].best;
        let mut stale = 0;
        let mut generations = 0;
        let mut stopped_early = false;

        for generation in 1..=config.num_generations {
            let children = next_generation(&population, problem, config, rng)?;
            population = Population::evaluate(problem, children);
            generations = generation;

            let stats = stats_for(&population, generation)?;
            debug!(
                generation,
                best = stats.best,
                mean = stats.mean,
                worst = stats.worst,
                "generation complete"
            );
            history.push(stats);

            if stats.best > best_seen {
                best_seen = stats.best;
                stale = 0;
            } else {
                stale += 1;
            }
            if config.stagnation_limit > 0 && stale >= config.stagnation_limit {
                info!(generation, stale, "best fitness stagnated, stopping early");
                stopped_early = true;
                break;
            }
        }

        let (best, best_fitness) = population
            .into_best()
            .ok_or_else(|| ScheduleError::InvalidConfig("population is empty".into()))?;

        info!(best_fitness, generations, "timetable search finished");

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            history,
            stopped_early,
        })
    }
}

/// Builds the next generation: draw one tournament sample, take its two
/// strongest members as the parent pair, cross them, mutate both children,
/// until `population_size` schedules exist. An odd size drops the last
/// surplus child.
///
/// With the default `tournament_size` of 2 the sample itself is the pair,
/// weaker parent first.
pub fn next_generation<R: Rng>(
    population: &Population,
    problem: &Problem,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Schedule>> {
    let target = config.population_size;
    let mut next = Vec::with_capacity(target + 1);

    while next.len() < target {
        let (p1, p2) = select_parents(population, config.tournament_size, rng)?;
        let (mut c1, mut c2) = crossover(p1, p2, rng)?;
        mutate(&mut c1, problem, config.mutation_rate, rng);
        mutate(&mut c2, problem, config.mutation_rate, rng);
        next.push(c1);
        next.push(c2);
    }

    next.truncate(target);
    Ok(next)
}

// One sample of at least two draws; the last two are the strongest.
fn select_parents<'a, R: Rng>(
    population: &'a Population,
    k: usize,
    rng: &mut R,
) -> Result<(&'a Schedule, &'a Schedule)> {
    match population.select(k.max(2), rng).as_slice() {
        [.., p1, p2] => Ok((*p1, *p2)),
        _ => Err(ScheduleError::InvalidConfig(
            "cannot select from an empty population".into(),
        )),
    }
}

fn stats_for(population: &Population, generation: usize) -> Result<GenerationStats> {
    let (best, mean, worst) = population
        .stats()
        .ok_or_else(|| ScheduleError::InvalidConfig("population is empty".into()))?;
    Ok(GenerationStats {
        generation,
        best,
        mean,
        worst,
    })
}

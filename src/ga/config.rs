//! GA configuration.
//!
//! [`GaConfig`] holds the run parameters of the evolutionary loop. It is
//! passed to [`GaRunner`](super::GaRunner) explicitly; there is no global
//! state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Configuration for a timetabling run.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.num_generations, 100);
/// assert_eq!(config.tournament_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of schedules per generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub num_generations: usize,

    /// Per-activity probability of mutating one field (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of schedules sampled when picking each parent.
    pub tournament_size: usize,

    /// Generations without improvement of the best fitness before stopping.
    ///
    /// 0 disables early stopping, so a run always lasts `num_generations`.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            num_generations: 100,
            mutation_rate: 0.01,
            tournament_size: 2,
            stagnation_limit: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ScheduleError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.num_generations == 0 {
            return Err(ScheduleError::InvalidConfig(
                "num_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ScheduleError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.tournament_size == 0 {
            return Err(ScheduleError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

//! Timetable CLI.
//!
//! Loads a problem definition, runs the genetic search and writes the best
//! schedule found.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use u_timetable::fitness::FitnessSummary;
use u_timetable::ga::{GaConfig, GaRunner};
use u_timetable::loader::{load_config, load_problem};
use u_timetable::report::ScheduleReport;
use u_timetable::ScheduleError;

#[derive(Parser)]
#[command(name = "u-timetable")]
#[command(about = "Assign course activities to rooms, facilitators and timeslots")]
struct Cli {
    /// Problem definition (JSON)
    #[arg(short, long, default_value = "data/sla.json")]
    input: PathBuf,

    /// Run configuration (JSON); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schedules per generation
    #[arg(long)]
    population: Option<usize>,

    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,

    /// Per-activity mutation probability
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations without improvement (0 = never)
    #[arg(long)]
    stagnation_limit: Option<usize>,

    /// Output file for the schedule report
    #[arg(short, long, default_value = "final_schedule.txt")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn ga_config(&self) -> Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => GaConfig::default(),
        };
        if let Some(n) = self.population {
            config = config.with_population_size(n);
        }
        if let Some(n) = self.generations {
            config = config.with_num_generations(n);
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(limit) = self.stagnation_limit {
            config = config.with_stagnation_limit(limit);
        }
        config.validate()?;
        Ok(config)
    }
}

/// `RUST_LOG` wins when set and parsable; otherwise `--verbose` picks the level.
fn log_filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env.as_deref(), cli.verbose))
        .init();

    let problem = match load_problem(&cli.input) {
        Ok(problem) => problem,
        Err(ScheduleError::Validation(errors)) => {
            for error in &errors {
                warn!("{error}");
            }
            anyhow::bail!("{} is not a valid problem definition", cli.input.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("loading {}", cli.input.display()));
        }
    };

    let config = cli.ga_config()?;
    let result = GaRunner::run(&problem, &config)?;

    let summary = FitnessSummary::calculate(&problem, &result.best);
    info!(
        double_booked = summary.double_booked,
        undersized_rooms = summary.undersized_rooms,
        preferred = summary.preferred_facilitators,
        feasible = summary.is_feasible(),
        "best schedule"
    );

    println!("Best Fitness: {}", result.best_fitness);

    let report = ScheduleReport::new(&problem, &result.best);
    report
        .write_to(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    print!("{report}");
    info!(output = %cli.output.display(), "schedule written");

    Ok(())
}

use u_timetable::fitness::{fitness, FitnessSummary};
use u_timetable::ga::{GaConfig, GaRunner};
use u_timetable::models::{Activity, Problem, Room};
use u_timetable::report::ScheduleReport;

fn sla_problem() -> Problem {
    let preferred = ["Glen", "Lock", "Banks", "Zeldin"];
    let others = ["Numen", "Richards"];
    Problem::new()
        .with_activity(
            Activity::new("SLA100A", 50)
                .with_preferred(preferred)
                .with_others(others),
        )
        .with_activity(
            Activity::new("SLA100B", 50)
                .with_preferred(preferred)
                .with_others(others),
        )
        .with_room(Room::new("Slater 003", 45))
        .with_room(Room::new("Roman 216", 30))
        .with_room(Room::new("Loft 206", 75))
        .with_facilitator("Lock")
        .with_facilitator("Glen")
        .with_facilitator("Banks")
        .with_timeslot("10 AM")
        .with_timeslot("11 AM")
        .with_timeslot("12 PM")
}

fn config() -> GaConfig {
    GaConfig::default()
        .with_population_size(20)
        .with_num_generations(10)
        .with_seed(2024)
}

#[test]
fn test_small_run_returns_complete_schedule() {
    let problem = sla_problem();
    let result = GaRunner::run(&problem, &config()).unwrap();

    assert_eq!(result.best.len(), 2);
    for assignment in &result.best {
        let (_, room, facilitator, timeslot) = problem.resolve(assignment).unwrap();
        assert!(!room.name.is_empty());
        assert!(!facilitator.name.is_empty());
        assert!(!timeslot.label.is_empty());
    }
    assert!(result.best_fitness.is_finite());
    assert_eq!(result.best_fitness, fitness(&problem, &result.best));
}

#[test]
fn test_seeded_runs_agree() {
    let problem = sla_problem();
    let first = GaRunner::run(&problem, &config()).unwrap();
    for _ in 0..3 {
        let again = GaRunner::run(&problem, &config()).unwrap();
        assert_eq!(again.best, first.best);
        assert_eq!(again.best_fitness, first.best_fitness);
    }
}

#[test]
fn test_search_beats_average_start() {
    let problem = sla_problem();
    let result = GaRunner::run(&problem, &config().with_num_generations(30)).unwrap();
    let initial = result.history[0];
    assert!(result.best_fitness >= initial.mean);
}

#[test]
fn test_report_lists_every_activity() {
    let problem = sla_problem();
    let result = GaRunner::run(&problem, &config()).unwrap();
    let report = ScheduleReport::new(&problem, &result.best);

    let lines = report.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("SLA100A: Room - "));
    assert!(lines[1].starts_with("SLA100B: Room - "));
    assert!(lines.iter().all(|l| l.contains(", Facilitator - ") && l.contains(", Time - ")));

    let summary = FitnessSummary::calculate(&problem, &result.best);
    let placed = summary.preferred_facilitators
        + summary.other_facilitators
        + summary.unrelated_facilitators;
    assert_eq!(placed, 2);
}

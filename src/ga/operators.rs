//! Genetic operators for timetables.
//!
//! - [`crossover`]: single-point crossover over the canonical activity order
//! - [`mutate`]: per-activity point mutation of one assignment field
//!
//! Both operate on owned [`Assignment`] values only; reference data is never
//! touched.

use rand::Rng;

use crate::error::{Result, ScheduleError};
use crate::models::{Assignment, Problem, Schedule};

/// Assignment field changed by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationField {
    Room,
    Facilitator,
    Timeslot,
}

impl MutationField {
    /// All fields in draw order.
    pub const ALL: [MutationField; 3] = [
        MutationField::Room,
        MutationField::Facilitator,
        MutationField::Timeslot,
    ];

    /// Size of the pool this field draws from.
    pub fn pool_size(self, problem: &Problem) -> usize {
        match self {
            MutationField::Room => problem.rooms.len(),
            MutationField::Facilitator => problem.facilitators.len(),
            MutationField::Timeslot => problem.timeslots.len(),
        }
    }

    fn slot(self, assignment: &mut Assignment) -> &mut usize {
        match self {
            MutationField::Room => &mut assignment.room,
            MutationField::Facilitator => &mut assignment.facilitator,
            MutationField::Timeslot => &mut assignment.timeslot,
        }
    }
}

/// Single-point crossover.
///
/// Draws a point uniformly from `0..=n`. The first child takes `p1`'s records
/// before the point and `p2`'s from the point on; the second child is the
/// complement. Children hold copies of the records.
///
/// Fails with [`ScheduleError::LengthMismatch`] if the parents differ in
/// length.
pub fn crossover<R: Rng>(
    p1: &Schedule,
    p2: &Schedule,
    rng: &mut R,
) -> Result<(Schedule, Schedule)> {
    if p1.len() != p2.len() {
        return Err(ScheduleError::LengthMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }
    let point = rng.random_range(0..=p1.len());
    Ok(crossover_at(p1, p2, point))
}

/// Crossover at a fixed point (clamped to the parents' length).
pub fn crossover_at(p1: &Schedule, p2: &Schedule, point: usize) -> (Schedule, Schedule) {
    let point = point.min(p1.len()).min(p2.len());
    let splice = |head: &Schedule, tail: &Schedule| {
        let mut assignments = Vec::with_capacity(tail.len());
        assignments.extend_from_slice(&head.assignments[..point]);
        assignments.extend_from_slice(&tail.assignments[point..]);
        Schedule::from_assignments(assignments)
    };
    (splice(p1, p2), splice(p2, p1))
}

/// Point mutation.
///
/// Each record mutates with probability `rate`: one field is picked uniformly
/// among those whose pool holds at least two values, and replaced by a
/// uniformly drawn different value. Records with no such field are skipped.
///
/// Returns the number of records changed.
pub fn mutate<R: Rng>(
    schedule: &mut Schedule,
    problem: &Problem,
    rate: f64,
    rng: &mut R,
) -> usize {
    let fields: Vec<(MutationField, usize)> = MutationField::ALL
        .iter()
        .map(|&f| (f, f.pool_size(problem)))
        .filter(|&(_, size)| size > 1)
        .collect();
    if fields.is_empty() || rate <= 0.0 {
        return 0;
    }

    let mut changed = 0;
    for assignment in &mut schedule.assignments {
        if !rng.random_bool(rate.min(1.0)) {
            continue;
        }
        let (field, size) = fields[rng.random_range(0..fields.len())];
        let slot = field.slot(assignment);
        *slot = redraw(*slot, size, rng);
        changed += 1;
    }
    changed
}

// Uniform over 0..size excluding `current`; size >= 2.
fn redraw<R: Rng>(current: usize, size: usize, rng: &mut R) -> usize {
    let pick = rng.random_range(0..size - 1);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::initial_population;
    use crate::models::{Activity, Room};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_problem() -> Problem {
        Problem::new()
            .with_activity(Activity::new("SLA100A", 50).with_preferred(["Glen"]))
            .with_activity(Activity::new("SLA100B", 50).with_preferred(["Lock"]))
            .with_activity(Activity::new("SLA191A", 50).with_preferred(["Banks"]))
            .with_activity(Activity::new("SLA191B", 50).with_preferred(["Banks"]))
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

    fn parents(rng: &mut SmallRng) -> (Problem, Schedule, Schedule) {
        let p = sample_problem();
        let mut pop = initial_population(&p, 2, rng).unwrap();
        let b = pop.pop().unwrap();
        let a = pop.pop().unwrap();
        (p, a, b)
    }

    #[test]
    fn test_crossover_at_splits() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (_, p1, p2) = parents(&mut rng);

        let (c1, c2) = crossover_at(&p1, &p2, 2);
        assert_eq!(c1.assignments[..2], p1.assignments[..2]);
        assert_eq!(c1.assignments[2..], p2.assignments[2..]);
        assert_eq!(c2.assignments[..2], p2.assignments[..2]);
        assert_eq!(c2.assignments[2..], p1.assignments[2..]);
    }

    #[test]
    fn test_crossover_at_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (_, p1, p2) = parents(&mut rng);

        let (c1, c2) = crossover_at(&p1, &p2, 0);
        assert_eq!(c1, p2);
        assert_eq!(c2, p1);

        let (c1, c2) = crossover_at(&p1, &p2, p1.len());
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_crossover_keeps_canonical_order() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (p, p1, p2) = parents(&mut rng);
        for _ in 0..20 {
            let (c1, c2) = crossover(&p1, &p2, &mut rng).unwrap();
            assert!(p.is_complete(&c1));
            assert!(p.is_complete(&c2));
        }
    }

    #[test]
    fn test_crossover_children_do_not_alias_parents() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (p, p1, p2) = parents(&mut rng);
        let (before1, before2) = (p1.clone(), p2.clone());

        let (mut c1, mut c2) = crossover(&p1, &p2, &mut rng).unwrap();
        for a in c1.assignments.iter_mut().chain(c2.assignments.iter_mut()) {
            a.room = (a.room + 1) % p.rooms.len();
            a.facilitator = (a.facilitator + 1) % p.facilitators.len();
        }

        assert_eq!(p1, before1);
        assert_eq!(p2, before2);
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (_, p1, mut p2) = parents(&mut rng);
        p2.assignments.pop();

        let err = crossover(&p1, &p2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::LengthMismatch { left: 4, right: 3 }
        ));
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (p, mut s, _) = parents(&mut rng);
        let before = s.clone();

        assert_eq!(mutate(&mut s, &p, 0.0, &mut rng), 0);
        assert_eq!(s, before);
    }

    #[test]
    fn test_mutate_rate_one_changes_every_record() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (p, mut s, _) = parents(&mut rng);

        for _ in 0..25 {
            let before = s.clone();
            assert_eq!(mutate(&mut s, &p, 1.0, &mut rng), s.len());

            for (old, new) in before.iter().zip(s.iter()) {
                let diffs = [
                    old.room != new.room,
                    old.facilitator != new.facilitator,
                    old.timeslot != new.timeslot,
                ];
                assert_eq!(diffs.iter().filter(|d| **d).count(), 1);
                assert_eq!(old.activity, new.activity);
            }
            assert!(p.is_complete(&s));
        }
    }

    #[test]
    fn test_mutate_skips_single_value_pools() {
        let p = Problem::new()
            .with_activity(Activity::new("SLA100A", 50))
            .with_room(Room::new("Loft 206", 75))
            .with_room(Room::new("Slater 003", 45))
            .with_facilitator("Glen")
            .with_timeslot("10 AM");
        let mut rng = SmallRng::seed_from_u64(42);
        let mut s = crate::ga::random_schedule(&p, &mut rng).unwrap();

        for _ in 0..10 {
            let before = s.clone();
            mutate(&mut s, &p, 1.0, &mut rng);
            assert_ne!(s.assignments[0].room, before.assignments[0].room);
            assert_eq!(s.assignments[0].facilitator, 0);
            assert_eq!(s.assignments[0].timeslot, 0);
        }

        let fixed = Problem::new()
            .with_activity(Activity::new("SLA100A", 50))
            .with_room(Room::new("Loft 206", 75))
            .with_facilitator("Glen")
            .with_timeslot("10 AM");
        let mut s = crate::ga::random_schedule(&fixed, &mut rng).unwrap();
        assert_eq!(mutate(&mut s, &fixed, 1.0, &mut rng), 0);
    }

    #[test]
    fn test_mutation_leaves_room_capacity_alone() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p = sample_problem();
        let capacities: Vec<u32> = p.rooms.iter().map(|r| r.capacity).collect();

        let mut population = initial_population(&p, 20, &mut rng).unwrap();
        for s in &mut population {
            mutate(s, &p, 1.0, &mut rng);
        }

        let after: Vec<u32> = p.rooms.iter().map(|r| r.capacity).collect();
        assert_eq!(capacities, after);
    }

    #[test]
    fn test_redraw_never_repeats() {
        let mut rng = SmallRng::seed_from_u64(42);
        for current in 0..4 {
            for _ in 0..50 {
                let v = redraw(current, 4, &mut rng);
                assert_ne!(v, current);
                assert!(v < 4);
            }
        }
    }
}

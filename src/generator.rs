//! Random problem instances.
//!
//! Builds covering problems with independently sampled attendance cells,
//! for property tests and experiments.

use rand::Rng;

use crate::models::{AttendanceMatrix, CoverageProblem, Day, Person};

/// Creates a random problem.
///
/// Each (day, person) cell is `true` with probability `density`
/// (clamped to `0.0..=1.0`). Days are named `"Day {i}"` and people
/// `"Person {i}"`, with IDs equal to their positions.
pub fn random_problem<R: Rng>(
    rng: &mut R,
    day_count: usize,
    person_count: usize,
    density: f64,
    limit: usize,
) -> CoverageProblem {
    let density = density.clamp(0.0, 1.0);

    let days: Vec<Day> = (0..day_count)
        .map(|i| Day::new(i as u32, format!("Day {i}")))
        .collect();
    let people: Vec<Person> = (0..person_count)
        .map(|i| Person::new(i as u32, format!("Person {i}")))
        .collect();

    let rows = (0..day_count)
        .map(|_| (0..person_count).map(|_| rng.random_bool(density)).collect())
        .collect();

    CoverageProblem::new(days, people)
        .with_limit(limit)
        .with_attendance(AttendanceMatrix::from_rows(rows))
}

/// Creates a random problem that is guaranteed to be coverable by all days.
///
/// Every person who ends up with no attendable day is assigned one random
/// day. With zero days the problem is returned unchanged.
pub fn random_coverable_problem<R: Rng>(
    rng: &mut R,
    day_count: usize,
    person_count: usize,
    density: f64,
    limit: usize,
) -> CoverageProblem {
    let mut problem = random_problem(rng, day_count, person_count, density, limit);
    if day_count == 0 {
        return problem;
    }

    for person in 0..person_count {
        let reachable = (0..day_count).any(|day| problem.attendance.can_attend(day, person));
        if !reachable {
            let day = rng.random_range(0..day_count);
            problem.attendance.set(day, person, true);
        }
    }
    problem
}

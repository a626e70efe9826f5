#![allow(dead_code)]

use course_days::models::{AttendanceMatrix, CoverageProblem, Day, Person};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a test subscriber once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Eight dates, nine people, limit four.
///
/// Fecha 1 reaches a, b, d, f, h; Fecha 5 reaches a to f; Fecha 6 reaches
/// g and i. No two dates cover everyone.
pub fn reference_problem() -> CoverageProblem {
    let people: Vec<Person> = ["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        .iter()
        .enumerate()
        .map(|(i, name)| Person::new(i as u32, *name))
        .collect();
    let days: Vec<Day> = (0..8)
        .map(|i| Day::new(i, format!("Fecha {i}")))
        .collect();

    let cells: &[(usize, usize)] = &[
        (0, 0), (0, 1), (0, 3), (0, 5), (0, 7),
        (1, 0), (1, 1), (1, 3), (1, 5), (1, 7),
        (2, 2), (2, 4), (2, 6),
        (3, 2), (3, 4),
        (4, 8),
        (5, 0), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5),
        (6, 6), (6, 8),
        (7, 8),
    ];
    let mut attendance = AttendanceMatrix::new(days.len(), people.len());
    for &(day, person) in cells {
        attendance.set(day, person, true);
    }

    CoverageProblem::new(days, people)
        .with_limit(4)
        .with_attendance(attendance)
}

/// People covered by the given day positions.
pub fn covered(problem: &CoverageProblem, positions: &[usize]) -> usize {
    (0..problem.person_count())
        .filter(|&p| positions.iter().any(|&d| problem.attendance.can_attend(d, p)))
        .count()
}

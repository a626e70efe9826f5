//! Course-day covering domain models.
//!
//! Provides the data types for describing a covering-scheduling problem
//! and the states the search walks through.
//!
//! # Domain Mappings
//!
//! | course-days | Training | Clinics | Events |
//! |-------------|----------|---------|--------|
//! | Day | Session date | Clinic slot | Show night |
//! | Person | Trainee | Patient | Ticket holder |
//! | AttendanceMatrix | Availability poll | Booking sheet | RSVP grid |
//! | CandidateState | Draft timetable | Slot plan | Tour plan |

mod attendance;
mod day;
mod person;
mod problem;
mod state;

pub use attendance::AttendanceMatrix;
pub use day::Day;
pub use person::Person;
pub use problem::CoverageProblem;
pub use state::CandidateState;

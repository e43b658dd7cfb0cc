//! Shared fixtures for tenure tests.

mod fixtures;

pub use fixtures::{day, team_history, two_person_history};

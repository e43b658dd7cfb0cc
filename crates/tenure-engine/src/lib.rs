// Engine module - activity retrieval and duration computation
// This layer sits between the commit store and the CLI presentation

mod duration;
mod error;
mod persons;

pub use duration::{
    ActiveCondition, DurationCondition, DurationPersons, DurationVar, SnapshotCondition,
};
pub use error::{Error, Result};
pub use persons::{ActivityPersons, ActivityVar, Source};

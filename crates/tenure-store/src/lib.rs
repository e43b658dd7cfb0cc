// SQLite commit store
// Keeps raw contribution events only; analytics happen in tenure-engine

mod conditions;
mod db;
mod query;
mod records;
mod schema;
mod timefmt;

pub mod error;

// Public API
pub use conditions::{NoMergesCondition, PeriodCondition, QueryCondition};
pub use db::Database;
pub use error::{Error, Result};
pub use query::{ActivityQuery, IdentityMode, Role};
pub use records::{CommitRecord, PersonRecord};

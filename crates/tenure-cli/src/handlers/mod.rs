pub mod duration;
pub mod identities;
pub mod import;
pub mod list;

use anyhow::Result;
use tenure_store::{NoMergesCondition, PeriodCondition, QueryCondition};

use crate::args::QueryArgs;
use crate::dates;

/// Query conditions from the shared `--since/--until/--no-merges` flags.
pub(crate) fn query_conditions(query: &QueryArgs) -> Result<Vec<Box<dyn QueryCondition>>> {
    let mut conditions: Vec<Box<dyn QueryCondition>> = Vec::new();

    let window = dates::parse_window(query.since.as_deref(), query.until.as_deref())?;
    if !window.is_unbounded() {
        conditions.push(Box::new(PeriodCondition::new(window)));
    }
    if query.no_merges {
        conditions.push(Box::new(NoMergesCondition));
    }

    Ok(conditions)
}

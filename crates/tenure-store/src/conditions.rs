use tenure_types::TimeWindow;

use crate::query::ActivityQuery;

/// Declarative pre-fetch filter applied to a not-yet-executed query.
///
/// Conditions are folded in caller order, each taking the query narrowed by
/// its predecessors. Applications are pure query-to-query transforms.
pub trait QueryCondition {
    fn apply(&self, query: ActivityQuery) -> ActivityQuery;
}

/// Restricts events to a timestamp window.
#[derive(Debug, Clone, Copy)]
pub struct PeriodCondition {
    window: TimeWindow,
}

impl PeriodCondition {
    pub fn new(window: TimeWindow) -> Self {
        Self { window }
    }
}

impl QueryCondition for PeriodCondition {
    fn apply(&self, query: ActivityQuery) -> ActivityQuery {
        query.restrict_period(&self.window)
    }
}

/// Excludes merge commits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMergesCondition;

impl QueryCondition for NoMergesCondition {
    fn apply(&self, query: ActivityQuery) -> ActivityQuery {
        query.exclude_merges()
    }
}

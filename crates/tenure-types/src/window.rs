use chrono::{DateTime, Utc};

/// Half-open time interval `[after, before)` with optional bounds.
///
/// A missing bound means unbounded on that side. Used both for query-time
/// period restriction and for post-fetch activity narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindow {
    /// Inclusive lower bound.
    pub after: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub before: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Window covering all of time.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn since(after: DateTime<Utc>) -> Self {
        Self {
            after: Some(after),
            before: None,
        }
    }

    pub fn until(before: DateTime<Utc>) -> Self {
        Self {
            after: None,
            before: Some(before),
        }
    }

    pub fn between(after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        Self {
            after: Some(after),
            before: Some(before),
        }
    }

    pub fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Self {
        Self { after, before }
    }

    pub fn is_unbounded(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        if let Some(after) = self.after
            && ts < after
        {
            return false;
        }
        if let Some(before) = self.before
            && ts >= before
        {
            return false;
        }
        true
    }

    /// Intersection of two windows: the later start and the earlier end.
    ///
    /// The result may be empty (`after >= before`); `contains` then rejects
    /// every timestamp, which is the correct narrowing outcome.
    pub fn intersect(&self, other: &TimeWindow) -> TimeWindow {
        let after = match (self.after, other.after) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let before = match (self.before, other.before) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        TimeWindow { after, before }
    }
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use tenure_types::{ActivityList, Durations, TimeWindow};

use crate::{Error, Result};

/// Duration variable: which end of a person's timeline the span is measured
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationVar {
    /// Time since the earliest activity.
    Age,
    /// Time since the latest activity.
    Idle,
}

impl DurationVar {
    pub fn as_str(self) -> &'static str {
        match self {
            DurationVar::Age => "age",
            DurationVar::Idle => "idle",
        }
    }
}

impl FromStr for DurationVar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "age" => Ok(DurationVar::Age),
            "idle" => Ok(DurationVar::Idle),
            other => Err(Error::InvalidVariable(other.to_string())),
        }
    }
}

impl std::fmt::Display for DurationVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post-fetch condition applied to a [`DurationPersons`] at construction.
///
/// Applications are pure transforms returning the updated target, applied in
/// caller order.
pub trait DurationCondition {
    fn apply(&self, target: DurationPersons) -> DurationPersons;
}

/// Fixes the reference time durations are measured against.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotCondition {
    date: DateTime<Utc>,
}

impl SnapshotCondition {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self { date }
    }
}

impl DurationCondition for SnapshotCondition {
    fn apply(&self, target: DurationPersons) -> DurationPersons {
        target.with_snapshot(self.date)
    }
}

/// Restricts durations to persons active inside a window.
///
/// Stacked conditions intersect their windows, so applying two is exactly
/// equivalent to applying one with the intersected window, in either order.
#[derive(Debug, Clone, Copy)]
pub struct ActiveCondition {
    window: TimeWindow,
}

impl ActiveCondition {
    pub fn new(window: TimeWindow) -> Self {
        Self { window }
    }
}

impl DurationCondition for ActiveCondition {
    fn apply(&self, target: DurationPersons) -> DurationPersons {
        target.restrict_active(self.window)
    }
}

/// High level interface to per-person duration variables (age, idle).
///
/// Single-shot: construct, optionally reshape through conditions, then call
/// [`durations`](DurationPersons::durations).
pub struct DurationPersons {
    var: DurationVar,
    activity: ActivityList,
    snapshot: Option<DateTime<Utc>>,
    window: TimeWindow,
}

impl DurationPersons {
    pub fn new(
        var: DurationVar,
        activity: ActivityList,
        conditions: &[&dyn DurationCondition],
    ) -> Self {
        let target = Self {
            var,
            activity,
            snapshot: None,
            window: TimeWindow::all(),
        };
        conditions
            .iter()
            .fold(target, |target, condition| condition.apply(target))
    }

    /// Fix the reference time for duration math.
    pub fn with_snapshot(mut self, date: DateTime<Utc>) -> Self {
        self.snapshot = Some(date);
        self
    }

    /// Replace the activity under consideration.
    pub fn with_activity(mut self, activity: ActivityList) -> Self {
        self.activity = activity;
        self
    }

    /// Narrow to persons active inside `window`, intersecting with any
    /// previously accumulated restriction.
    pub fn restrict_active(mut self, window: TimeWindow) -> Self {
        self.window = self.window.intersect(&window);
        self
    }

    /// The activity the durations will be computed over, restrictions
    /// applied.
    pub fn activity(&self) -> ActivityList {
        if self.window.is_unbounded() {
            self.activity.clone()
        } else {
            self.activity.active(&self.window)
        }
    }

    /// Per-person durations for the configured variable.
    ///
    /// The reference time is the explicit snapshot when one was set,
    /// otherwise the latest event timestamp of the (narrowed) activity, so
    /// results computed after further narrowing use a different implicit
    /// snapshot unless one was fixed. Fails with [`Error::EmptyDomain`] when
    /// the narrowed activity is empty and no snapshot was set; with an
    /// explicit snapshot an empty activity yields an empty mapping.
    pub fn durations(&self) -> Result<Durations> {
        let activity = self.activity();
        let snapshot = match self.snapshot {
            Some(date) => date,
            None => activity.maxend()?,
        };
        let durations = match self.var {
            DurationVar::Age => activity.age(snapshot),
            DurationVar::Idle => activity.idle(snapshot),
        };
        Ok(durations)
    }
}

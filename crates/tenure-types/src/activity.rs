use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::duration::Durations;
use crate::error::{Error, Result};
use crate::person::Person;
use crate::window::TimeWindow;

/// Per-person activity timeline.
///
/// Maps each contributor to the ascending timestamps of their contribution
/// events under the filters that produced the list. Every present person has
/// at least one timestamp; a person with no matching events is simply absent.
/// Lists are never mutated after construction: narrowing operations return a
/// new list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityList {
    timelines: BTreeMap<Person, Vec<DateTime<Utc>>>,
}

impl ActivityList {
    /// Build a list from unordered `(person, timestamp)` rows.
    ///
    /// Rows are grouped by person and each timeline sorted ascending.
    pub fn from_rows(rows: impl IntoIterator<Item = (Person, DateTime<Utc>)>) -> Self {
        let mut timelines: BTreeMap<Person, Vec<DateTime<Utc>>> = BTreeMap::new();
        for (person, ts) in rows {
            timelines.entry(person).or_default().push(ts);
        }
        for timeline in timelines.values_mut() {
            timeline.sort_unstable();
        }
        Self { timelines }
    }

    /// Persons with at least one event inside `window`, full timelines kept.
    ///
    /// Narrowing selects persons, not events: a surviving person retains
    /// their entire timeline, so ages are still measured from the earliest
    /// recorded activity.
    pub fn active(&self, window: &TimeWindow) -> ActivityList {
        let timelines = self
            .timelines
            .iter()
            .filter(|(_, timeline)| timeline.iter().any(|&ts| window.contains(ts)))
            .map(|(person, timeline)| (person.clone(), timeline.clone()))
            .collect();
        Self { timelines }
    }

    /// Elapsed time from each person's earliest activity to `date`.
    ///
    /// Negative when `date` precedes the first activity; values are never
    /// clamped.
    pub fn age(&self, date: DateTime<Utc>) -> Durations {
        Durations::from_iter(self.timelines.iter().map(|(person, timeline)| {
            // non-empty per construction
            (person.clone(), date - timeline[0])
        }))
    }

    /// Elapsed time from each person's latest activity to `date`.
    pub fn idle(&self, date: DateTime<Utc>) -> Durations {
        Durations::from_iter(self.timelines.iter().map(|(person, timeline)| {
            (person.clone(), date - timeline[timeline.len() - 1])
        }))
    }

    /// Latest timestamp across all persons and all their events.
    ///
    /// This is the implicit snapshot used when duration math is given no
    /// explicit reference time.
    pub fn maxend(&self) -> Result<DateTime<Utc>> {
        self.timelines
            .values()
            .filter_map(|timeline| timeline.last())
            .max()
            .copied()
            .ok_or(Error::EmptyDomain)
    }

    pub fn get(&self, person: &Person) -> Option<&[DateTime<Utc>]> {
        self.timelines.get(person).map(|v| v.as_slice())
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.timelines.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Person, &[DateTime<Utc>])> {
        self.timelines.iter().map(|(p, t)| (p, t.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}

use std::collections::BTreeMap;

use chrono::TimeDelta;
use serde_json::{Map, Value};

use crate::person::Person;

/// Per-person duration values (ages, idle times).
///
/// Durations are signed and never clamped: a reference time earlier than a
/// person's activity yields a negative span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Durations {
    values: BTreeMap<Person, TimeDelta>,
}

impl Durations {
    pub fn get(&self, person: &Person) -> Option<&TimeDelta> {
        self.values.get(person)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Person, &TimeDelta)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plain JSON object mapping each person to their duration in whole
    /// seconds. Order-independent; intended for downstream reporting.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (person, delta) in &self.values {
            object.insert(person.as_str().to_string(), Value::from(delta.num_seconds()));
        }
        Value::Object(object)
    }
}

impl FromIterator<(Person, TimeDelta)> for Durations {
    fn from_iter<I: IntoIterator<Item = (Person, TimeDelta)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Durations {
    type Item = (Person, TimeDelta);
    type IntoIter = std::collections::btree_map::IntoIter<Person, TimeDelta>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

use std::path::PathBuf;
use std::str::FromStr;

use tenure_store::{ActivityQuery, Database, IdentityMode, QueryCondition, Role};
use tenure_types::ActivityList;

use crate::{Error, Result};

/// Person-selection variable for activity queries.
///
/// The `u` variants key persons by unified identity instead of the raw
/// recorded name. String spellings (`list_authors`, `list_committers`,
/// `list_uauthors`, `list_ucommitters`) parse via [`FromStr`]; anything else
/// fails with [`Error::InvalidVariable`] before any store access happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityVar {
    ListAuthors,
    ListCommitters,
    ListUauthors,
    ListUcommitters,
}

impl ActivityVar {
    pub(crate) fn selection(self) -> (Role, IdentityMode) {
        match self {
            ActivityVar::ListAuthors => (Role::Authors, IdentityMode::Raw),
            ActivityVar::ListCommitters => (Role::Committers, IdentityMode::Raw),
            ActivityVar::ListUauthors => (Role::Authors, IdentityMode::Unified),
            ActivityVar::ListUcommitters => (Role::Committers, IdentityMode::Unified),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityVar::ListAuthors => "list_authors",
            ActivityVar::ListCommitters => "list_committers",
            ActivityVar::ListUauthors => "list_uauthors",
            ActivityVar::ListUcommitters => "list_ucommitters",
        }
    }
}

impl FromStr for ActivityVar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list_authors" => Ok(ActivityVar::ListAuthors),
            "list_committers" => Ok(ActivityVar::ListCommitters),
            "list_uauthors" => Ok(ActivityVar::ListUauthors),
            "list_ucommitters" => Ok(ActivityVar::ListUcommitters),
            other => Err(Error::InvalidVariable(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the activity data comes from: an already-open store, or a path to
/// open one from. There is no third state.
pub enum Source {
    /// Use an existing store handle.
    Session(Database),
    /// Open the store at `path`, echoing SQL when `echo` is set.
    Connect { path: PathBuf, echo: bool },
}

/// High level interface to per-person activity.
///
/// Holds a built-but-unexecuted query for the chosen selection mode with
/// every supplied condition folded in, in order. [`activity`] executes it.
///
/// [`activity`]: ActivityPersons::activity
pub struct ActivityPersons {
    db: Database,
    query: ActivityQuery,
}

impl ActivityPersons {
    pub fn new(
        var: ActivityVar,
        conditions: &[&dyn QueryCondition],
        source: Source,
    ) -> Result<Self> {
        let db = match source {
            Source::Session(db) => db,
            Source::Connect { path, echo } => Database::open_with(&path, echo)?,
        };

        let (role, identity) = var.selection();
        let query = conditions.iter().fold(
            ActivityQuery::new(role, identity),
            |query, condition| condition.apply(query),
        );

        Ok(Self { db, query })
    }

    /// Execute the query and return the activity list.
    ///
    /// Each call is one fresh read against the store; results are never
    /// cached.
    pub fn activity(&self) -> Result<ActivityList> {
        Ok(self.db.person_activity(&self.query)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenure_store::{NoMergesCondition, PeriodCondition};
    use tenure_testing::{day, team_history, two_person_history};
    use tenure_types::{Person, TimeWindow};

    #[test]
    fn test_var_spellings_parse() {
        assert_eq!(
            "list_authors".parse::<ActivityVar>().unwrap(),
            ActivityVar::ListAuthors
        );
        assert_eq!(
            "list_ucommitters".parse::<ActivityVar>().unwrap(),
            ActivityVar::ListUcommitters
        );
    }

    #[test]
    fn test_unknown_var_fails_without_store_access() {
        let err = "list_foo".parse::<ActivityVar>().unwrap_err();
        assert!(matches!(err, Error::InvalidVariable(ref var) if var == "list_foo"));

        let err = "length".parse::<ActivityVar>().unwrap_err();
        assert!(matches!(err, Error::InvalidVariable(_)));
    }

    #[test]
    fn test_activity_for_raw_authors() {
        let db = two_person_history().unwrap();
        let persons =
            ActivityPersons::new(ActivityVar::ListAuthors, &[], Source::Session(db)).unwrap();

        let activity = persons.activity().unwrap();

        assert_eq!(activity.len(), 2);
        assert_eq!(
            activity.get(&Person::from("Alice")),
            Some(&[day(2013, 1, 1), day(2013, 6, 1)][..])
        );
        assert_eq!(
            activity.get(&Person::from("Bob")),
            Some(&[day(2013, 3, 1)][..])
        );
    }

    #[test]
    fn test_unified_authors_fold_aliases_into_canonical_person() {
        let db = team_history().unwrap();
        let persons =
            ActivityPersons::new(ActivityVar::ListUauthors, &[], Source::Session(db)).unwrap();

        let activity = persons.activity().unwrap();

        let alice = activity.get(&Person::from("Alice")).unwrap();
        assert_eq!(alice.len(), 3);
        assert!(activity.get(&Person::from("A. Liddell")).is_none());
    }

    #[test]
    fn test_conditions_narrow_the_query() {
        let db = team_history().unwrap();
        let period = PeriodCondition::new(TimeWindow::since(day(2013, 3, 1)));
        let nomerges = NoMergesCondition;
        let persons = ActivityPersons::new(
            ActivityVar::ListUauthors,
            &[&period, &nomerges],
            Source::Session(db),
        )
        .unwrap();

        let activity = persons.activity().unwrap();

        // Alice keeps only the June commit: January precedes the period and
        // the September one is a merge
        assert_eq!(
            activity.get(&Person::from("Alice")),
            Some(&[day(2013, 6, 1)][..])
        );
        assert_eq!(activity.len(), 3);
    }

    #[test]
    fn test_activity_reexecutes_on_every_call() {
        let db = two_person_history().unwrap();
        let persons =
            ActivityPersons::new(ActivityVar::ListAuthors, &[], Source::Session(db)).unwrap();

        let first = persons.activity().unwrap();
        let second = persons.activity().unwrap();

        assert_eq!(first, second);
    }
}

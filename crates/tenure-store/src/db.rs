use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use tenure_types::{ActivityList, Person};

use crate::query::ActivityQuery;
use crate::records::{CommitRecord, PersonRecord};
use crate::schema;
use crate::timefmt::{format_ts, parse_ts};
use crate::{Error, Result};

/// Handle on a commit store.
///
/// Wraps a single synchronous SQLite connection. The `echo` toggle prints
/// every activity SELECT to stderr before execution.
pub struct Database {
    conn: Connection,
    echo: bool,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        Self::open_with(db_path, false)
    }

    pub fn open_with(db_path: &Path, echo: bool) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn, echo };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with(false)
    }

    pub fn open_in_memory_with(echo: bool) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn, echo };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    /// Row id for the given `(name, email)` pair, inserting if unseen.
    pub fn find_or_insert_person(&self, person: &PersonRecord) -> Result<i64> {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM people WHERE name = ?1 AND email IS ?2",
                params![&person.name, &person.email],
                |row| row.get(0),
            )
            .optional()?;

        if let Some(id) = existing {
            return Ok(id);
        }

        self.conn.execute(
            "INSERT INTO people (name, email) VALUES (?1, ?2)",
            params![&person.name, &person.email],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a commit event. Re-importing the same hash is a no-op.
    pub fn insert_commit(&self, commit: &CommitRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO commits (hash, author_id, committer_id, author_date, commit_date, is_merge)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(hash) DO NOTHING
            "#,
            params![
                &commit.hash,
                commit.author_id,
                commit.committer_id,
                format_ts(commit.author_date),
                format_ts(commit.commit_date),
                commit.is_merge
            ],
        )?;

        Ok(())
    }

    /// Record that `person_id` is an alias of `canonical_id`.
    pub fn link_identity(&self, person_id: i64, canonical_id: i64) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO identities (person_id, canonical_id)
            VALUES (?1, ?2)
            ON CONFLICT(person_id) DO UPDATE SET canonical_id = ?2
            "#,
            params![person_id, canonical_id],
        )?;

        Ok(())
    }

    /// Row id of a person by recorded name, if present.
    pub fn find_person_by_name(&self, name: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM people WHERE name = ?1 LIMIT 1",
                [name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    pub fn count_people(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn count_commits(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM commits", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Execute an activity query and group its rows into per-person
    /// timelines. One read against the store per call; nothing is cached.
    pub fn person_activity(&self, query: &ActivityQuery) -> Result<ActivityList> {
        let sql = query.to_sql();
        if self.echo {
            eprintln!("[sql] {}", sql);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let raw_rows = stmt
            .query_map(query.params().as_slice(), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        let mut rows: Vec<(Person, DateTime<Utc>)> = Vec::with_capacity(raw_rows.len());
        for (name, raw_ts) in raw_rows {
            rows.push((Person::from(name), parse_ts(&raw_ts)?));
        }

        Ok(ActivityList::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{NoMergesCondition, PeriodCondition, QueryCondition};
    use crate::query::{IdentityMode, Role};
    use chrono::TimeZone;
    use tenure_types::TimeWindow;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn person(name: &str) -> PersonRecord {
        PersonRecord {
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
        }
    }

    fn commit(hash: &str, author: i64, committer: i64, date: DateTime<Utc>) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            author_id: author,
            committer_id: committer,
            author_date: date,
            commit_date: date + chrono::TimeDelta::hours(2),
            is_merge: false,
        }
    }

    /// Alice authors twice (one commit merged by Bob), Bob authors once.
    /// "A. Liddell" is an alias of Alice.
    fn seeded() -> Result<Database> {
        let db = Database::open_in_memory()?;

        let alice = db.find_or_insert_person(&person("Alice"))?;
        let bob = db.find_or_insert_person(&person("Bob"))?;
        let alias = db.find_or_insert_person(&PersonRecord {
            name: "A. Liddell".to_string(),
            email: None,
        })?;
        db.link_identity(alias, alice)?;

        db.insert_commit(&commit("c1", alice, alice, ts(2013, 1, 1)))?;
        db.insert_commit(&commit("c2", bob, bob, ts(2013, 3, 1)))?;
        db.insert_commit(&commit("c3", alice, bob, ts(2013, 6, 1)))?;
        db.insert_commit(&CommitRecord {
            is_merge: true,
            ..commit("c4", alias, alias, ts(2013, 9, 1))
        })?;

        Ok(db)
    }

    #[test]
    fn test_find_or_insert_person_is_idempotent() -> Result<()> {
        let db = Database::open_in_memory()?;

        let first = db.find_or_insert_person(&person("Alice"))?;
        let second = db.find_or_insert_person(&person("Alice"))?;

        assert_eq!(first, second);
        assert_eq!(db.count_people()?, 1);
        Ok(())
    }

    #[test]
    fn test_insert_commit_ignores_duplicate_hash() -> Result<()> {
        let db = Database::open_in_memory()?;
        let alice = db.find_or_insert_person(&person("Alice"))?;

        db.insert_commit(&commit("c1", alice, alice, ts(2013, 1, 1)))?;
        db.insert_commit(&commit("c1", alice, alice, ts(2013, 2, 1)))?;

        assert_eq!(db.count_commits()?, 1);
        Ok(())
    }

    #[test]
    fn test_raw_authors_activity_is_grouped_and_ascending() -> Result<()> {
        let db = seeded()?;

        let activity =
            db.person_activity(&ActivityQuery::new(Role::Authors, IdentityMode::Raw))?;

        assert_eq!(activity.len(), 3);
        assert_eq!(
            activity.get(&Person::from("Alice")),
            Some(&[ts(2013, 1, 1), ts(2013, 6, 1)][..])
        );
        assert_eq!(
            activity.get(&Person::from("A. Liddell")),
            Some(&[ts(2013, 9, 1)][..])
        );
        Ok(())
    }

    #[test]
    fn test_unified_authors_merge_aliases() -> Result<()> {
        let db = seeded()?;

        let activity =
            db.person_activity(&ActivityQuery::new(Role::Authors, IdentityMode::Unified))?;

        assert_eq!(activity.len(), 2);
        assert_eq!(
            activity.get(&Person::from("Alice")),
            Some(&[ts(2013, 1, 1), ts(2013, 6, 1), ts(2013, 9, 1)][..])
        );
        assert!(activity.get(&Person::from("A. Liddell")).is_none());
        Ok(())
    }

    #[test]
    fn test_committers_use_commit_date() -> Result<()> {
        let db = seeded()?;

        let activity =
            db.person_activity(&ActivityQuery::new(Role::Committers, IdentityMode::Raw))?;

        // c3 was committed by Bob two hours after it was authored
        let bob = activity.get(&Person::from("Bob")).unwrap();
        assert_eq!(bob.len(), 2);
        assert_eq!(bob[1], ts(2013, 6, 1) + chrono::TimeDelta::hours(2));
        Ok(())
    }

    #[test]
    fn test_period_condition_bounds_are_half_open() -> Result<()> {
        let db = seeded()?;

        let period = PeriodCondition::new(TimeWindow::between(ts(2013, 1, 1), ts(2013, 6, 1)));
        let query = period.apply(ActivityQuery::new(Role::Authors, IdentityMode::Raw));
        let activity = db.person_activity(&query)?;

        // c1 included at the inclusive start, c3 excluded at the exclusive end
        assert_eq!(
            activity.get(&Person::from("Alice")),
            Some(&[ts(2013, 1, 1)][..])
        );
        assert!(activity.get(&Person::from("Bob")).is_some());
        assert!(activity.get(&Person::from("A. Liddell")).is_none());
        Ok(())
    }

    #[test]
    fn test_no_merges_condition_drops_merge_commits() -> Result<()> {
        let db = seeded()?;

        let query = NoMergesCondition.apply(ActivityQuery::new(Role::Authors, IdentityMode::Raw));
        let activity = db.person_activity(&query)?;

        assert!(activity.get(&Person::from("A. Liddell")).is_none());
        assert_eq!(activity.len(), 2);
        Ok(())
    }

    #[test]
    fn test_person_activity_reexecutes_per_call() -> Result<()> {
        let db = seeded()?;
        let query = ActivityQuery::new(Role::Authors, IdentityMode::Raw);

        let before = db.person_activity(&query)?;
        let carol = db.find_or_insert_person(&person("Carol"))?;
        db.insert_commit(&commit("c5", carol, carol, ts(2013, 12, 1)))?;
        let after = db.person_activity(&query)?;

        assert_eq!(before.len(), 3);
        assert_eq!(after.len(), 4);
        Ok(())
    }
}

//! Seeded in-memory commit stores for engine and CLI tests.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use tenure_store::{CommitRecord, Database, PersonRecord};

/// Midnight UTC on the given day.
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn person(name: &str) -> PersonRecord {
    PersonRecord {
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
    }
}

fn commit(hash: &str, author: i64, date: DateTime<Utc>, is_merge: bool) -> CommitRecord {
    CommitRecord {
        hash: hash.to_string(),
        author_id: author,
        committer_id: author,
        author_date: date,
        commit_date: date,
        is_merge,
    }
}

/// Two contributors, no merges, no aliases:
/// Alice on 2013-01-01 and 2013-06-01, Bob on 2013-03-01.
pub fn two_person_history() -> Result<Database> {
    let db = Database::open_in_memory()?;

    let alice = db.find_or_insert_person(&person("Alice"))?;
    let bob = db.find_or_insert_person(&person("Bob"))?;

    db.insert_commit(&commit("a1", alice, day(2013, 1, 1), false))?;
    db.insert_commit(&commit("b1", bob, day(2013, 3, 1), false))?;
    db.insert_commit(&commit("a2", alice, day(2013, 6, 1), false))?;

    Ok(db)
}

/// Three contributors with a merge commit and a unified-identity alias:
/// "A. Liddell" resolves to Alice, whose merge commit lands on 2013-09-01.
pub fn team_history() -> Result<Database> {
    let db = two_person_history()?;

    let alice = db
        .find_person_by_name("Alice")?
        .expect("fixture seeds Alice");
    let alias = db.find_or_insert_person(&PersonRecord {
        name: "A. Liddell".to_string(),
        email: None,
    })?;
    db.link_identity(alias, alice)?;

    let carol = db.find_or_insert_person(&person("Carol"))?;

    db.insert_commit(&commit("m1", alias, day(2013, 9, 1), true))?;
    db.insert_commit(&commit("c1", carol, day(2013, 11, 1), false))?;

    Ok(db)
}

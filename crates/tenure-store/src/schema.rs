use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Store Design Rationale
//
// Why TEXT timestamps (RFC 3339 UTC)?
// - Lexicographic order equals chronological order, so range predicates
//   stay plain string comparisons
// - Round-trips losslessly through chrono without a custom column codec
//
// Why a separate identities table (not a column on people)?
// - Raw rows stay exactly as recorded on the commit; merging is opt-in
// - A person with no identities row is their own canonical identity,
//   resolved with LEFT JOIN + COALESCE at query time
pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT
        );

        CREATE TABLE IF NOT EXISTS identities (
            person_id INTEGER PRIMARY KEY REFERENCES people(id),
            canonical_id INTEGER NOT NULL REFERENCES people(id)
        );

        CREATE TABLE IF NOT EXISTS commits (
            id INTEGER PRIMARY KEY,
            hash TEXT NOT NULL UNIQUE,
            author_id INTEGER NOT NULL REFERENCES people(id),
            committer_id INTEGER NOT NULL REFERENCES people(id),
            author_date TEXT NOT NULL,
            commit_date TEXT NOT NULL,
            is_merge BOOLEAN DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_commits_author_date ON commits(author_date);
        CREATE INDEX IF NOT EXISTS idx_commits_commit_date ON commits(commit_date);
        CREATE INDEX IF NOT EXISTS idx_commits_author ON commits(author_id);
        CREATE INDEX IF NOT EXISTS idx_commits_committer ON commits(committer_id);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS commits;
        DROP TABLE IF EXISTS identities;
        DROP TABLE IF EXISTS people;
        "#,
    )?;
    Ok(())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contributor row from the store.
///
/// One row per distinct `(name, email)` pair as recorded on commits;
/// identity merging happens in a separate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Name as recorded on the commit.
    pub name: String,
    /// Email as recorded on the commit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Commit event row from the store.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    /// Commit hash (unique).
    pub hash: String,
    /// Row id of the author in `people`.
    pub author_id: i64,
    /// Row id of the committer in `people`.
    pub committer_id: i64,
    /// When the change was authored.
    pub author_date: DateTime<Utc>,
    /// When the change was committed.
    pub commit_date: DateTime<Utc>,
    /// Whether this commit merges branches.
    pub is_merge: bool,
}

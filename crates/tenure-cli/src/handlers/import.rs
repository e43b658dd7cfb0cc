use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tenure_store::{CommitRecord, Database, PersonRecord};

use crate::dates;

/// One commit per line. Committer falls back to the author, commit date to
/// the author date.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    hash: String,
    author: String,
    #[serde(default)]
    author_email: Option<String>,
    #[serde(default)]
    committer: Option<String>,
    #[serde(default)]
    committer_email: Option<String>,
    author_date: String,
    #[serde(default)]
    commit_date: Option<String>,
    #[serde(default)]
    is_merge: bool,
}

pub fn handle(db: &Database, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut imported = 0;
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: ImportRecord = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: malformed commit record", file.display(), lineno + 1))?;

        let author_id = db.find_or_insert_person(&PersonRecord {
            name: record.author.clone(),
            email: record.author_email.clone(),
        })?;
        let committer_id = match &record.committer {
            Some(committer) => db.find_or_insert_person(&PersonRecord {
                name: committer.clone(),
                email: record.committer_email.clone(),
            })?,
            None => author_id,
        };

        let author_date = dates::parse_date(&record.author_date)
            .with_context(|| format!("{}:{}: bad author_date", file.display(), lineno + 1))?;
        let commit_date = match &record.commit_date {
            Some(raw) => dates::parse_date(raw)
                .with_context(|| format!("{}:{}: bad commit_date", file.display(), lineno + 1))?,
            None => author_date,
        };

        db.insert_commit(&CommitRecord {
            hash: record.hash,
            author_id,
            committer_id,
            author_date,
            commit_date,
            is_merge: record.is_merge,
        })?;
        imported += 1;
    }

    println!(
        "Imported {} commits (store now holds {} commits from {} people)",
        imported,
        db.count_commits()?,
        db.count_people()?
    );

    Ok(())
}

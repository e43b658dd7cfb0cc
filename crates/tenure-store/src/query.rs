use rusqlite::ToSql;
use tenure_types::TimeWindow;

use crate::timefmt::format_ts;

/// Which identity on the commit a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Who authored the change; events dated by `author_date`.
    Authors,
    /// Who committed the change; events dated by `commit_date`.
    Committers,
}

/// How person identity is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    /// One person per recorded name.
    Raw,
    /// Names merged through the identities table into canonical persons.
    Unified,
}

/// Built-but-unexecuted activity query.
///
/// Accumulates predicate clauses and their parameters; conditions narrow the
/// query through the semantic methods below, each seeing the query already
/// narrowed by its predecessors. Execution happens in
/// [`Database::person_activity`](crate::Database::person_activity).
pub struct ActivityQuery {
    role: Role,
    identity: IdentityMode,
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl ActivityQuery {
    pub fn new(role: Role, identity: IdentityMode) -> Self {
        Self {
            role,
            identity,
            clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn identity(&self) -> IdentityMode {
        self.identity
    }

    /// Restrict events to `[after, before)` on the role's date column.
    pub fn restrict_period(mut self, window: &TimeWindow) -> Self {
        let column = self.date_column();
        if let Some(after) = window.after {
            self.clauses.push(format!("c.{} >= ?", column));
            self.params.push(Box::new(format_ts(after)));
        }
        if let Some(before) = window.before {
            self.clauses.push(format!("c.{} < ?", column));
            self.params.push(Box::new(format_ts(before)));
        }
        self
    }

    /// Drop merge commits from the selection.
    pub fn exclude_merges(mut self) -> Self {
        self.clauses.push("c.is_merge = 0".to_string());
        self
    }

    fn date_column(&self) -> &'static str {
        match self.role {
            Role::Authors => "author_date",
            Role::Committers => "commit_date",
        }
    }

    fn id_column(&self) -> &'static str {
        match self.role {
            Role::Authors => "author_id",
            Role::Committers => "committer_id",
        }
    }

    /// Assemble the SELECT yielding `(person name, event timestamp)` rows,
    /// ordered by person then ascending timestamp.
    pub(crate) fn to_sql(&self) -> String {
        let date = self.date_column();
        let id = self.id_column();

        let (projection, identity_joins) = match self.identity {
            IdentityMode::Raw => ("p.name", String::new()),
            IdentityMode::Unified => (
                "cp.name",
                "\nLEFT JOIN identities i ON i.person_id = p.id\n\
                 JOIN people cp ON cp.id = COALESCE(i.canonical_id, p.id)"
                    .to_string(),
            ),
        };

        let where_clause = if self.clauses.is_empty() {
            String::new()
        } else {
            format!("\nWHERE {}", self.clauses.join(" AND "))
        };

        format!(
            "SELECT {projection}, c.{date}\n\
             FROM commits c\n\
             JOIN people p ON p.id = c.{id}{identity_joins}{where_clause}\n\
             ORDER BY {projection} ASC, c.{date} ASC"
        )
    }

    pub(crate) fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

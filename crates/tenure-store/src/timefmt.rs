use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

/// Persisted timestamp representation: RFC 3339 UTC with a trailing `Z`.
/// Lexicographic comparison of these strings matches chronological order.
pub(crate) fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn parse_ts(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| Error::Query(format!("Malformed stored timestamp '{}': {}", raw, err)))
}

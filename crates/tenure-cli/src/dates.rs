use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tenure_types::TimeWindow;

/// Parse a CLI timestamp: full RFC 3339, or a bare date meaning midnight UTC.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD or RFC 3339", raw))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Window from optional `--since`/`--until` style bounds.
pub fn parse_window(since: Option<&str>, until: Option<&str>) -> Result<TimeWindow> {
    let after = since.map(parse_date).transpose()?;
    let before = until.map(parse_date).transpose()?;
    Ok(TimeWindow::new(after, before))
}

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AppError;

/// Parse a `--since`/`--until` argument into a UTC instant.
///
/// Bare dates resolve to midnight UTC; full RFC 3339 timestamps are taken
/// as given.
pub(crate) fn parse_moment(s: &str) -> Result<DateTime<Utc>, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(midnight(d));
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(midnight(d));
    }
    // Try full RFC 3339
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

fn midnight(d: NaiveDate) -> DateTime<Utc> {
    d.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

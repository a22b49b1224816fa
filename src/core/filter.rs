//! Query filters applied at the filename level, before any file is read.

use chrono::{DateTime, Utc};

/// Time window over session start times.
///
/// Both bounds are strict: `since` keeps sessions that started strictly
/// after it, `until` keeps sessions that started strictly before it. Either
/// bound may be absent; with both absent the range matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TimeRange {
    pub(crate) since: Option<DateTime<Utc>>,
    pub(crate) until: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub(crate) fn new(since: Option<DateTime<Utc>>, until: Option<DateTime<Utc>>) -> Self {
        Self { since, until }
    }

    pub(crate) fn is_unbounded(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }

    pub(crate) fn contains(&self, t: DateTime<Utc>) -> bool {
        if let Some(since) = self.since
            && t <= since
        {
            return false;
        }
        if let Some(until) = self.until
            && t >= until
        {
            return false;
        }
        true
    }
}

/// Optional criteria for session queries.
///
/// `project` is matched against the sanitized filename fragment, so two
/// projects differing only in stripped characters collide here.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionFilters {
    pub(crate) project: Option<String>,
    pub(crate) range: TimeRange,
}

impl SessionFilters {
    pub(crate) fn for_project(project: &str) -> Self {
        Self {
            project: Some(project.to_string()),
            range: TimeRange::default(),
        }
    }
}

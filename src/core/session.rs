//! The persisted session entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded span of work on one project.
///
/// Stored as one JSON file per session. Timestamps serialize as Unix epoch
/// seconds, so on-disk precision is whole seconds regardless of what the
/// clock hands out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Session {
    pub(crate) id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub(crate) start_time: DateTime<Utc>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) end_time: Option<DateTime<Utc>>,
    pub(crate) project: String,
    pub(crate) tags: Vec<String>,
}

impl Session {
    /// A session is active while it has no recorded end.
    pub(crate) fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}

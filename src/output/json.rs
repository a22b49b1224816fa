use crate::core::Session;

/// Pretty JSON array of sessions, as stored on disk.
pub(crate) fn sessions_json(sessions: &[Session]) -> String {
    serde_json::to_string_pretty(sessions).unwrap_or_else(|_| "[]".to_string())
}

/// Environment variable overriding the session storage directory.
pub(crate) const WORKLOG_HOME_ENV: &str = "WORKLOG_HOME";

/// Default storage directory under the user's home: `~/.worklog`
pub(crate) const DEFAULT_WORKLOG_DIR: &str = ".worklog";

/// Extension carried by every session file.
pub(crate) const SESSION_FILE_EXT: &str = ".json";

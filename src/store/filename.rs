//! Session filename codec.
//!
//! Every session file is named `<id>-<sanitizedProject>-<unixSeconds>.json`.
//! The name alone carries enough metadata to answer id, project and time
//! queries without opening the file, which is what makes the directory
//! usable as an index.
//!
//! Sanitizing the project strips every non-alphanumeric character. That
//! transform is one-way: the decoded project fragment is only good for
//! equality checks against another sanitized name, never for display.
//!
//! The three-way `-` split breaks if the id or a surviving project fragment
//! contains a literal `-`. Generated ids are hex-only (see the id
//! generator), which sidesteps the hazard for files this tool writes
//! itself; a hand-crafted id containing `-` will fail to decode.

use chrono::{DateTime, Utc};

use crate::consts::SESSION_FILE_EXT;
use crate::core::Session;
use crate::error::StoreError;

/// The metadata triple a filename encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionFileName {
    pub(crate) id: String,
    /// Raw project on the encode path; the sanitized fragment after decode.
    pub(crate) project: String,
    pub(crate) start_time: DateTime<Utc>,
}

/// Strip every character that is not an ASCII letter or digit.
pub(crate) fn sanitize_project(project: &str) -> String {
    project.chars().filter(char::is_ascii_alphanumeric).collect()
}

impl SessionFileName {
    pub(crate) fn for_session(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            project: session.project.clone(),
            start_time: session.start_time,
        }
    }

    pub(crate) fn sanitized_project(&self) -> String {
        sanitize_project(&self.project)
    }

    /// Render the canonical filename.
    pub(crate) fn encode(&self) -> String {
        format!(
            "{}-{}-{}{}",
            self.id,
            self.sanitized_project(),
            self.start_time.timestamp(),
            SESSION_FILE_EXT
        )
    }

    /// Parse a directory entry name back into its metadata triple.
    ///
    /// Anything that does not split into exactly three `-`-separated parts
    /// with an integer timestamp is rejected.
    pub(crate) fn decode(name: &str) -> Result<Self, StoreError> {
        let invalid = || StoreError::InvalidFilename {
            name: name.to_string(),
        };

        let parts: Vec<&str> = name.split('-').collect();
        let [id, project, timestamp] = parts.as_slice() else {
            return Err(invalid());
        };

        let secs: i64 = timestamp
            .strip_suffix(SESSION_FILE_EXT)
            .unwrap_or(timestamp)
            .parse()
            .map_err(|_| invalid())?;
        let start_time = DateTime::from_timestamp(secs, 0).ok_or_else(invalid)?;

        Ok(Self {
            id: id.to_string(),
            project: project.to_string(),
            start_time,
        })
    }
}

//! Session persistence.
//!
//! The storage directory doubles as the index: each session lives in one
//! JSON file whose name encodes (id, project, start time), so queries can
//! filter on filenames before reading any file body. The `SessionStore`
//! trait keeps callers independent of that layout; an alternative backend
//! only has to satisfy the same contract.

pub(crate) mod filename;
pub(crate) mod fs;
pub(crate) mod index;

use crate::core::{Session, SessionFilters};
use crate::error::StoreError;

pub(crate) use fs::FsSessionStore;
pub(crate) use index::InvalidEntryPolicy;

/// The persistence contract consumed by the rest of the application.
pub(crate) trait SessionStore {
    /// Write one session to its canonical file, silently overwriting any
    /// previous content under the same encoded name.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Look a session up by id. Absence is `Ok(None)`, not an error.
    fn find_by_id(&self, id: &str) -> Result<Option<Session>, StoreError>;

    /// Remove the session with the given id, or fail with
    /// [`StoreError::NotFound`].
    fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// All sessions matching the filters, ascending by start time.
    fn find_all(&self, filters: &SessionFilters) -> Result<Vec<Session>, StoreError>;

    /// The most recently started session, reading only that one file.
    fn find_last(&self) -> Result<Option<Session>, StoreError>;

    /// Distinct project names in first-seen order.
    fn find_all_projects(&self) -> Result<Vec<String>, StoreError>;

    /// Distinct tags used across one project's sessions, first-seen order.
    fn find_all_project_tags(&self, project: &str) -> Result<Vec<String>, StoreError>;
}

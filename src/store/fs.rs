//! Filesystem-backed session store: one JSON file per session, the
//! directory itself as the only index. There is no cache; every query
//! re-reads the directory so results always reflect on-disk truth.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Session, SessionFilters};
use crate::error::StoreError;
use crate::store::SessionStore;
use crate::store::filename::SessionFileName;
use crate::store::index::{DirectoryIndex, IndexEntry, InvalidEntryPolicy};

pub(crate) struct FsSessionStore {
    root: PathBuf,
    index: DirectoryIndex,
}

impl FsSessionStore {
    /// Open the store at `root`, creating the directory (and parents) on
    /// first use. A root that cannot be created is a fatal startup
    /// condition.
    pub(crate) fn open(
        root: impl Into<PathBuf>,
        policy: InvalidEntryPolicy,
    ) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::StorageUnavailable {
            path: root.clone(),
            source,
        })?;
        let index = DirectoryIndex::new(root.clone(), policy);
        Ok(Self { root, index })
    }

    fn read_session(&self, path: &Path) -> Result<Session, StoreError> {
        let raw = fs::read(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    fn find_entry_by_id(&self, id: &str) -> Result<Option<IndexEntry>, StoreError> {
        let entries = self.index.entries()?;
        Ok(entries.into_iter().find(|e| e.meta.id == id))
    }
}

impl SessionStore for FsSessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let name = SessionFileName::for_session(session).encode();
        let path = self.root.join(name);
        let body = serde_json::to_vec_pretty(session).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, body).map_err(|source| StoreError::Write { path, source })
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Session>, StoreError> {
        match self.find_entry_by_id(id)? {
            Some(entry) => self.read_session(&entry.path(&self.root)).map(Some),
            None => Ok(None),
        }
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let Some(entry) = self.find_entry_by_id(id)? else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        let path = entry.path(&self.root);
        fs::remove_file(&path).map_err(|source| StoreError::Delete { path, source })
    }

    fn find_all(&self, filters: &SessionFilters) -> Result<Vec<Session>, StoreError> {
        let mut entries = self.index.entries()?;
        if let Some(project) = &filters.project {
            entries = DirectoryIndex::filter_by_project(entries, project);
        }
        entries = DirectoryIndex::filter_by_time_range(entries, &filters.range);

        let mut sessions = Vec::with_capacity(entries.len());
        for entry in entries {
            sessions.push(self.read_session(&entry.path(&self.root))?);
        }
        sessions.sort_by_key(|s| s.start_time);
        Ok(sessions)
    }

    fn find_last(&self) -> Result<Option<Session>, StoreError> {
        let mut entries = self.index.entries()?;
        if entries.is_empty() {
            return Ok(None);
        }
        // newest first; only the winning file gets read
        entries.sort_by(|a, b| b.meta.start_time.cmp(&a.meta.start_time));
        self.read_session(&entries[0].path(&self.root)).map(Some)
    }

    fn find_all_projects(&self) -> Result<Vec<String>, StoreError> {
        let sessions = self.find_all(&SessionFilters::default())?;
        let mut projects: Vec<String> = Vec::new();
        for session in sessions {
            if !projects.contains(&session.project) {
                projects.push(session.project);
            }
        }
        Ok(projects)
    }

    fn find_all_project_tags(&self, project: &str) -> Result<Vec<String>, StoreError> {
        let sessions = self.find_all(&SessionFilters::for_project(project))?;
        let mut tags: Vec<String> = Vec::new();
        for session in sessions {
            for tag in session.tags {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        Ok(tags)
    }
}

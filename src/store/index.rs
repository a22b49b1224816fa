//! Directory-as-index: enumerate session files and filter on decoded
//! filenames, never on file contents. Listing cost stays proportional to
//! directory size rather than total stored bytes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::TimeRange;
use crate::error::StoreError;
use crate::store::filename::{SessionFileName, sanitize_project};

/// What to do with a directory entry whose name does not decode.
///
/// `Fail` aborts the whole listing on the first bad name. `Skip` drops the
/// entry with a warning on stderr and keeps going.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum InvalidEntryPolicy {
    #[default]
    Fail,
    Skip,
}

/// A directory entry whose filename has been decoded.
#[derive(Debug, Clone)]
pub(crate) struct IndexEntry {
    pub(crate) file_name: String,
    pub(crate) meta: SessionFileName,
}

impl IndexEntry {
    pub(crate) fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.file_name)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DirectoryIndex {
    root: PathBuf,
    policy: InvalidEntryPolicy,
}

impl DirectoryIndex {
    pub(crate) fn new(root: PathBuf, policy: InvalidEntryPolicy) -> Self {
        Self { root, policy }
    }

    fn unavailable(&self, source: std::io::Error) -> StoreError {
        StoreError::StorageUnavailable {
            path: self.root.clone(),
            source,
        }
    }

    /// All non-directory entry names in the storage directory.
    pub(crate) fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(|e| self.unavailable(e))? {
            let entry = entry.map_err(|e| self.unavailable(e))?;
            let file_type = entry.file_type().map_err(|e| self.unavailable(e))?;
            if file_type.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// Decode a batch of entry names, applying the invalid-entry policy.
    pub(crate) fn decode(&self, names: Vec<String>) -> Result<Vec<IndexEntry>, StoreError> {
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            match SessionFileName::decode(&name) {
                Ok(meta) => entries.push(IndexEntry {
                    file_name: name,
                    meta,
                }),
                Err(err) => match self.policy {
                    InvalidEntryPolicy::Fail => return Err(err),
                    InvalidEntryPolicy::Skip => {
                        eprintln!("Warning: skipping {}", err);
                    }
                },
            }
        }
        Ok(entries)
    }

    /// List and decode in one step.
    pub(crate) fn entries(&self) -> Result<Vec<IndexEntry>, StoreError> {
        self.decode(self.list()?)
    }

    /// Keep entries whose sanitized project fragment matches the sanitized
    /// query.
    pub(crate) fn filter_by_project(entries: Vec<IndexEntry>, project: &str) -> Vec<IndexEntry> {
        let wanted = sanitize_project(project);
        entries
            .into_iter()
            .filter(|e| e.meta.project == wanted)
            .collect()
    }

    /// Keep entries whose start time falls inside the range.
    pub(crate) fn filter_by_time_range(
        entries: Vec<IndexEntry>,
        range: &TimeRange,
    ) -> Vec<IndexEntry> {
        if range.is_unbounded() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|e| range.contains(e.meta.start_time))
            .collect()
    }
}

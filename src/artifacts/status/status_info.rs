use crate::artifacts::status::file_change::FileStatus;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Snapshot of the working tree, keyed by changed path
///
/// Only valid at the instant it was queried. Paths without changes are never
/// present, so an empty snapshot means a clean tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    entries: BTreeMap<PathBuf, FileStatus>,
}

/// The three mutually exclusive shapes a snapshot can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Clean,
    UntrackedOnly,
    HasTrackedChanges,
}

impl WorkingTreeStatus {
    pub fn insert(&mut self, path: impl Into<PathBuf>, status: FileStatus) {
        self.entries.insert(path.into(), status);
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &FileStatus)> {
        self.entries.iter()
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn classify(&self) -> StatusClass {
        if self.is_clean() {
            StatusClass::Clean
        } else if self.entries.values().all(FileStatus::is_untracked) {
            StatusClass::UntrackedOnly
        } else {
            StatusClass::HasTrackedChanges
        }
    }
}

impl FromIterator<(PathBuf, FileStatus)> for WorkingTreeStatus {
    fn from_iter<T: IntoIterator<Item = (PathBuf, FileStatus)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

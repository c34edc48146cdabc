/// State of a path in one area (staging or worktree)
///
/// Short codes follow `git status --porcelain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FileState {
    #[default]
    Unmodified,
    Untracked,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    UpdatedButUnmerged,
}

impl From<&FileState> for &str {
    fn from(state: &FileState) -> Self {
        match state {
            FileState::Unmodified => " ",
            FileState::Untracked => "?",
            FileState::Modified => "M",
            FileState::Added => "A",
            FileState::Deleted => "D",
            FileState::Renamed => "R",
            FileState::Copied => "C",
            FileState::UpdatedButUnmerged => "U",
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state_str: &str = self.into();
        write!(f, "{}", state_str)
    }
}

/// Pair of states for one changed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FileStatus {
    pub staging: FileState,
    pub worktree: FileState,
}

impl FileStatus {
    pub fn new(staging: FileState, worktree: FileState) -> Self {
        Self { staging, worktree }
    }

    pub fn untracked() -> Self {
        Self::new(FileState::Untracked, FileState::Untracked)
    }

    pub fn is_untracked(&self) -> bool {
        self.staging == FileState::Untracked && self.worktree == FileState::Untracked
    }
}

impl From<git2::Status> for FileStatus {
    fn from(status: git2::Status) -> Self {
        if status == git2::Status::WT_NEW {
            return Self::untracked();
        }
        if status.is_conflicted() {
            return Self::new(FileState::UpdatedButUnmerged, FileState::UpdatedButUnmerged);
        }

        let staging = if status.is_index_new() {
            FileState::Added
        } else if status.is_index_deleted() {
            FileState::Deleted
        } else if status.is_index_renamed() {
            FileState::Renamed
        } else if status.is_index_modified() || status.is_index_typechange() {
            FileState::Modified
        } else {
            FileState::Unmodified
        };

        let worktree = if status.is_wt_new() {
            FileState::Untracked
        } else if status.is_wt_deleted() {
            FileState::Deleted
        } else if status.is_wt_renamed() {
            FileState::Renamed
        } else if status.is_wt_modified() || status.is_wt_typechange() {
            FileState::Modified
        } else {
            FileState::Unmodified
        };

        Self::new(staging, worktree)
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_untracked() {
            return write!(f, "??");
        }
        write!(f, "{}{}", self.staging, self.worktree)
    }
}

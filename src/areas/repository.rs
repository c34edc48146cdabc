use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::author::{Author, Role};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::CommitId;
use crate::artifacts::status::file_change::FileStatus;
use crate::artifacts::status::status_info::WorkingTreeStatus;
use crate::errors::BackendError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CEILING_DIRECTORIES_VAR: &str = "GIT_CEILING_DIRECTORIES";

/// How far a reset rewrites repository state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// HEAD, index and working tree all match the target
    #[default]
    Hard,
    /// HEAD and index match the target, working tree contents are kept
    Mixed,
}

impl From<ResetMode> for git2::ResetType {
    fn from(mode: ResetMode) -> Self {
        match mode {
            ResetMode::Hard => git2::ResetType::Hard,
            ResetMode::Mixed => git2::ResetType::Mixed,
        }
    }
}

/// Everything the checkpoint engine needs from a version-control backend
pub trait RepositoryAccessor {
    /// Changed paths of the working tree, untracked files included
    fn status(&self) -> Result<WorkingTreeStatus, BackendError>;

    /// ID of the commit currently checked out
    fn head_id(&self) -> Result<CommitId, BackendError>;

    /// History from HEAD backward, following primary parents only
    fn log(&self) -> Result<RevList<'_>, BackendError>;

    /// Stage every tracked modification (deletions included) and commit it
    /// on top of HEAD. Untracked files are left out.
    fn commit_tracked(&self, message: &str) -> Result<Commit, BackendError>;

    /// Move HEAD to `target`, rewriting index and, per `mode`, the worktree
    fn reset(&self, target: &CommitId, mode: ResetMode) -> Result<(), BackendError>;
}

/// Repository backed by libgit2
pub struct GitRepository {
    inner: git2::Repository,
}

impl GitRepository {
    /// Open the repository containing `path`, searching parent directories
    ///
    /// The search stops at any directory listed in `GIT_CEILING_DIRECTORIES`.
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let ceiling_dirs = std::env::var_os(CEILING_DIRECTORIES_VAR)
            .map(|dirs| std::env::split_paths(&dirs).collect::<Vec<_>>())
            .unwrap_or_default();

        let inner =
            git2::Repository::open_ext(path, git2::RepositoryOpenFlags::empty(), &ceiling_dirs)
                .map_err(|source| BackendError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
        let Some(workdir) = inner.workdir() else {
            return Err(BackendError::Bare {
                path: inner.path().to_path_buf(),
            });
        };

        debug!(workdir = %workdir.display(), "opened repository");

        Ok(Self { inner })
    }

    fn head_commit(&self) -> Result<Option<git2::Commit<'_>>, git2::Error> {
        match self.inner.head() {
            Ok(head) => head.peel_to_commit().map(Some),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl RepositoryAccessor for GitRepository {
    fn status(&self) -> Result<WorkingTreeStatus, BackendError> {
        let mut options = git2::StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .renames_head_to_index(true);

        let statuses = self
            .inner
            .statuses(Some(&mut options))
            .map_err(BackendError::Status)?;

        let status = statuses
            .iter()
            .filter(|entry| !entry.status().is_ignored() && entry.status() != git2::Status::CURRENT)
            .map(|entry| {
                let path = PathBuf::from(String::from_utf8_lossy(entry.path_bytes()).into_owned());
                (path, FileStatus::from(entry.status()))
            })
            .collect::<WorkingTreeStatus>();

        for (path, file_status) in status.entries() {
            debug!(path = %path.display(), status = %file_status, "status entry");
        }

        Ok(status)
    }

    fn head_id(&self) -> Result<CommitId, BackendError> {
        let head = self
            .inner
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(BackendError::Head)?;

        Ok(head.id().into())
    }

    fn log(&self) -> Result<RevList<'_>, BackendError> {
        let mut revwalk = self.inner.revwalk().map_err(BackendError::History)?;
        revwalk.push_head().map_err(BackendError::History)?;
        revwalk
            .simplify_first_parent()
            .map_err(BackendError::History)?;

        Ok(RevList::from_revwalk(&self.inner, revwalk))
    }

    fn commit_tracked(&self, message: &str) -> Result<Commit, BackendError> {
        let author = Author::resolve(&self.inner, Role::Author)?;
        let committer = Author::resolve(&self.inner, Role::Committer)?;

        let mut index = self.inner.index().map_err(BackendError::Commit)?;
        // Refreshes existing entries only: new files are never picked up
        index
            .update_all(["*"], None)
            .map_err(BackendError::Commit)?;
        index.write().map_err(BackendError::Commit)?;

        let tree_id = index.write_tree().map_err(BackendError::Commit)?;
        let tree = self
            .inner
            .find_tree(tree_id)
            .map_err(BackendError::Commit)?;

        let parent = self.head_commit().map_err(BackendError::Commit)?;
        let parents = parent.iter().collect::<Vec<_>>();

        let oid = self
            .inner
            .commit(Some("HEAD"), &author, &committer, message, &tree, &parents)
            .map_err(BackendError::Commit)?;

        info!(commit = %oid, parents = parents.len(), "created commit");

        let parent_ids = parents.iter().map(|parent| CommitId::from(parent.id())).collect();
        Ok(Commit::new(oid.into(), message.to_string(), parent_ids))
    }

    fn reset(&self, target: &CommitId, mode: ResetMode) -> Result<(), BackendError> {
        let reset_error = |source| BackendError::Reset {
            target: target.to_string(),
            source,
        };

        let oid = git2::Oid::try_from(target).map_err(reset_error)?;
        let commit = self.inner.find_commit(oid).map_err(reset_error)?;
        self.inner
            .reset(commit.as_object(), mode.into(), None)
            .map_err(reset_error)?;

        info!(commit = %target, ?mode, "reset HEAD");

        Ok(())
    }
}

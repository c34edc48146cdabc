//! Error taxonomy
//!
//! Two layers of failures exist:
//!
//! - [`BackendError`]: a single call into the repository backend failed
//!   (open, status, HEAD, history, commit, reset).
//! - [`WipError`]: what the checkpoint engine reports to its caller. Backend
//!   reads are passed through unchanged, while the two mutating operations are
//!   wrapped so the caller can tell a failed checkpoint from a failed restore.
//!
//! None of these are recovered from locally. The binary entry point is the
//! only place that turns them into a diagnostic and a non-zero exit.

use crate::artifacts::objects::author::Role;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single repository backend call
#[derive(Error, Debug)]
pub enum BackendError {
    /// The path is not (inside) a git repository, or it cannot be opened
    #[error("not a git repository: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// The repository has no working directory to checkpoint
    #[error("bare repository has no working tree: {}", path.display())]
    Bare { path: PathBuf },

    #[error("failed to read working tree status")]
    Status(#[source] git2::Error),

    #[error("failed to resolve HEAD")]
    Head(#[source] git2::Error),

    #[error("failed to read commit history")]
    History(#[source] git2::Error),

    #[error("failed to create commit")]
    Commit(#[source] git2::Error),

    #[error("failed to reset to {target}")]
    Reset {
        target: String,
        #[source]
        source: git2::Error,
    },

    /// No author or committer identity is available for the checkpoint commit
    #[error("{role} identity unknown: {message}")]
    Identity { role: Role, message: String },
}

/// Failure of a checkpoint engine operation
#[derive(Error, Debug)]
pub enum WipError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Every commit reachable from HEAD along primary parents is a wip commit
    #[error("no non wip commit found in history")]
    HistoryExhausted,

    #[error("could not create wip commit")]
    CommitFailed(#[source] BackendError),

    #[error("could not restore last non wip commit")]
    RestoreFailed(#[source] BackendError),
}

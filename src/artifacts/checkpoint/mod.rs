//! Wip checkpoint engine
//!
//! The engine runs in exactly one of two modes per invocation:
//!
//! - **Checkpoint**: inspect the working tree and, when tracked files changed,
//!   record them in a new wip commit on top of HEAD.
//! - **Restore**: walk history from HEAD along primary parents, skipping the
//!   contiguous run of wip commits at the tip, and reset to the first commit
//!   that is not one (the restore point).
//!
//! ## Known limitation
//!
//! Only primary parents are followed. A merge commit whose message happens to
//! be the marker is skipped like any other wip commit and its other parents
//! are never considered.

pub mod outcome;

use crate::areas::repository::{RepositoryAccessor, ResetMode};
use crate::artifacts::objects::commit::{Commit, MARKER_MESSAGE};
use crate::artifacts::status::status_info::{StatusClass, WorkingTreeStatus};
use crate::errors::WipError;
use derive_new::new;
use outcome::Outcome;
use tracing::{debug, info};

/// What a single run of the engine does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Checkpoint { dry_run: bool },
    Restore { reset: ResetMode },
}

#[derive(new)]
pub struct Engine<'r, R: RepositoryAccessor + ?Sized> {
    repository: &'r R,
    mode: Mode,
}

impl<R: RepositoryAccessor + ?Sized> Engine<'_, R> {
    pub fn run(&self) -> Result<Outcome, WipError> {
        match self.mode {
            Mode::Checkpoint { dry_run } => self.checkpoint(dry_run),
            Mode::Restore { reset } => self.restore(reset),
        }
    }

    /// Nearest commit, HEAD included, that is not a wip commit
    pub fn find_restore_point(&self) -> Result<Commit, WipError> {
        // the walk (and any backend handle behind it) is released on every return
        let log = self.repository.log()?;

        for (depth, commit) in log.enumerate() {
            let commit = commit?;
            if !commit.is_marker() {
                debug!(
                    commit = commit.id().short(),
                    depth,
                    message = commit.message(),
                    "found restore point"
                );
                return Ok(commit);
            }
            debug!(commit = commit.id().short(), depth, "skipping wip commit");
        }

        Err(WipError::HistoryExhausted)
    }

    pub fn restore(&self, mode: ResetMode) -> Result<Outcome, WipError> {
        let restore_point = self.find_restore_point()?;
        let head = self.repository.head_id()?;

        if restore_point.id() == &head {
            return Ok(Outcome::NoOpRestore);
        }

        self.repository
            .reset(restore_point.id(), mode)
            .map_err(WipError::RestoreFailed)?;

        info!(from = %head, to = %restore_point.id(), "unwound wip commits");

        Ok(Outcome::Restored {
            target: restore_point,
        })
    }

    pub fn checkpoint(&self, dry_run: bool) -> Result<Outcome, WipError> {
        let status = self.repository.status()?;

        match classify_status(&status) {
            StatusClass::Clean => Ok(Outcome::NothingClean),
            StatusClass::UntrackedOnly => Ok(Outcome::NothingUntracked),
            StatusClass::HasTrackedChanges if dry_run => Ok(Outcome::DryRun),
            StatusClass::HasTrackedChanges => {
                let commit = self
                    .repository
                    .commit_tracked(MARKER_MESSAGE)
                    .map_err(WipError::CommitFailed)?;

                Ok(Outcome::Checkpointed { commit })
            }
        }
    }
}

pub fn classify_status(status: &WorkingTreeStatus) -> StatusClass {
    status.classify()
}

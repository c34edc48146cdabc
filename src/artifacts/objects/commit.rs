//! Commit nodes as seen by the checkpoint engine
//!
//! Only the parts of a commit the engine needs are kept: its ID, the raw
//! message and the ordered list of parent IDs. Commits are never mutated;
//! new ones are created exclusively by the repository backend.

use crate::artifacts::objects::object_id::CommitId;
use derive_new::new;

/// Message of every wip commit
///
/// A commit is a wip commit when its message is exactly this string: no
/// trimming, no case folding.
pub const MARKER_MESSAGE: &str = "wip";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    message: String,
    parents: Vec<CommitId>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First parent, the only one followed when walking history
    pub fn primary_parent(&self) -> Option<&CommitId> {
        self.parents.first()
    }

    pub fn is_marker(&self) -> bool {
        self.message == MARKER_MESSAGE
    }
}

impl TryFrom<&git2::Commit<'_>> for Commit {
    type Error = git2::Error;

    fn try_from(commit: &git2::Commit<'_>) -> Result<Self, Self::Error> {
        // Non UTF-8 messages can never equal the marker, a lossy copy is enough
        let message = String::from_utf8_lossy(commit.message_raw_bytes()).into_owned();
        let parents = commit.parent_ids().map(CommitId::from).collect();

        Ok(Commit::new(commit.id().into(), message, parents))
    }
}

use crate::artifacts::objects::commit::Commit;

/// Result of one engine run
///
/// `Display` renders the line printed to stdout for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Checkpoint requested on a tree without changes
    NothingClean,
    /// Checkpoint requested, but every change is an untracked file
    NothingUntracked,
    /// A wip commit would have been made
    DryRun,
    /// A wip commit was made on top of HEAD
    Checkpointed { commit: Commit },
    /// HEAD already is the restore point
    NoOpRestore,
    Restored { target: Commit },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NothingClean => write!(f, "Nothing to commit, working tree clean"),
            Outcome::NothingUntracked => {
                write!(f, "Nothing to commit, all changes are to untracked files")
            }
            Outcome::DryRun => write!(f, "Dry run, not committing changes"),
            Outcome::Checkpointed { commit } => {
                write!(f, "Added a new wip commit {}", commit.id())
            }
            Outcome::NoOpRestore => write!(f, "No wip commits"),
            Outcome::Restored { target } => {
                write!(f, "Reverted HEAD to last non wip commit: {}", target.id())
            }
        }
    }
}

use crate::artifacts::objects::commit::Commit;
use crate::errors::BackendError;

/// Lazy walk of history from HEAD backward along primary parents
///
/// Items are produced one commit at a time, so a walk that stops early never
/// reads the rest of history. Whatever backend handle feeds the walk is owned
/// by the boxed iterator and released when the `RevList` is dropped.
pub struct RevList<'r> {
    commits: Box<dyn Iterator<Item = Result<Commit, BackendError>> + 'r>,
}

impl<'r> RevList<'r> {
    pub fn new(commits: impl Iterator<Item = Result<Commit, BackendError>> + 'r) -> Self {
        Self {
            commits: Box::new(commits),
        }
    }

    /// Walk a `git2` revwalk already pushed at its starting point
    pub fn from_revwalk(repository: &'r git2::Repository, revwalk: git2::Revwalk<'r>) -> Self {
        Self::new(revwalk.map(move |oid| {
            let oid = oid.map_err(BackendError::History)?;
            let commit = repository
                .find_commit(oid)
                .map_err(BackendError::History)?;

            Commit::try_from(&commit).map_err(BackendError::History)
        }))
    }
}

impl Iterator for RevList<'_> {
    type Item = Result<Commit, BackendError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.commits.next()
    }
}

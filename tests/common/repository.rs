//! Repository setup and inspection through libgit2, independent of the
//! binaries under test

use git2::{IndexAddOption, Repository, Signature, Time};
use std::path::Path;

fn signature() -> Signature<'static> {
    Signature::new("fake_user", "fake_email@email.com", &Time::new(1_672_574_400, 0))
        .expect("Failed to build signature")
}

fn open(dir: &Path) -> Repository {
    Repository::open(dir).unwrap_or_else(|e| panic!("Failed to open {:?}: {}", dir, e))
}

pub fn init_repository(dir: &Path) {
    Repository::init(dir).unwrap_or_else(|e| panic!("Failed to init {:?}: {}", dir, e));
}

pub fn init_bare_repository(dir: &Path) {
    Repository::init_bare(dir).unwrap_or_else(|e| panic!("Failed to init {:?}: {}", dir, e));
}

/// Set `key` in the repository's local config file
pub fn set_config(dir: &Path, key: &str, value: &str) {
    let repository = open(dir);
    let mut config = repository.config().expect("Failed to read config");
    let mut local = config
        .open_level(git2::ConfigLevel::Local)
        .expect("Failed to open local config");
    local
        .set_str(key, value)
        .unwrap_or_else(|e| panic!("Failed to set {}: {}", key, e));
}

/// Stage every file in the working tree (new and deleted ones included) and
/// commit with the exact `message`
pub fn commit_all(dir: &Path, message: &str) -> String {
    let repository = open(dir);
    let mut index = repository.index().expect("Failed to read index");
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.update_all(["*"], None).expect("Failed to stage deletions");
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repository.find_tree(tree_id).expect("Failed to find tree");
    let parent = repository.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents = parent.iter().collect::<Vec<_>>();

    repository
        .commit(
            Some("HEAD"),
            &signature(),
            &signature(),
            message,
            &tree,
            &parents,
        )
        .expect("Failed to commit")
        .to_string()
}

/// Stage a single path without committing
pub fn stage_file(dir: &Path, path: &str) {
    let repository = open(dir);
    let mut index = repository.index().expect("Failed to read index");
    index.add_path(Path::new(path)).expect("Failed to stage file");
    index.write().expect("Failed to write index");
}

pub fn head_id(dir: &Path) -> String {
    open(dir)
        .head()
        .and_then(|head| head.peel_to_commit())
        .map(|commit| commit.id().to_string())
        .expect("Failed to resolve HEAD")
}

pub fn head_message(dir: &Path) -> String {
    let repository = open(dir);
    let commit = repository
        .head()
        .and_then(|head| head.peel_to_commit())
        .expect("Failed to resolve HEAD");
    commit.message().unwrap_or_default().to_string()
}

/// Name and email of the author of HEAD
pub fn head_author(dir: &Path) -> (String, String) {
    let repository = open(dir);
    let commit = repository
        .head()
        .and_then(|head| head.peel_to_commit())
        .expect("Failed to resolve HEAD");
    identity_of(&commit.author())
}

/// Name and email of the committer of HEAD
pub fn head_committer(dir: &Path) -> (String, String) {
    let repository = open(dir);
    let commit = repository
        .head()
        .and_then(|head| head.peel_to_commit())
        .expect("Failed to resolve HEAD");
    identity_of(&commit.committer())
}

fn identity_of(signature: &Signature<'_>) -> (String, String) {
    (
        signature.name().unwrap_or_default().to_string(),
        signature.email().unwrap_or_default().to_string(),
    )
}

/// IDs of the parents of `commit_id`, in order
pub fn parent_ids(dir: &Path, commit_id: &str) -> Vec<String> {
    let repository = open(dir);
    let oid = git2::Oid::from_str(commit_id).expect("Invalid commit id");
    let commit = repository.find_commit(oid).expect("Failed to find commit");
    commit.parent_ids().map(|oid| oid.to_string()).collect()
}

/// Number of commits reachable from HEAD
pub fn commit_count(dir: &Path) -> usize {
    let repository = open(dir);
    let mut revwalk = repository.revwalk().expect("Failed to create revwalk");
    revwalk.push_head().expect("Failed to push HEAD");
    revwalk.count()
}

/// Paths changed in the committed tree of `commit_id` relative to its parent
pub fn changed_paths(dir: &Path, commit_id: &str) -> Vec<String> {
    let repository = open(dir);
    let oid = git2::Oid::from_str(commit_id).expect("Invalid commit id");
    let commit = repository.find_commit(oid).expect("Failed to find commit");
    let tree = commit.tree().expect("Failed to read tree");
    let parent_tree = commit.parent(0).ok().map(|p| p.tree().expect("Failed to read tree"));

    let diff = repository
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
        .expect("Failed to diff trees");

    diff.deltas()
        .filter_map(|delta| delta.new_file().path().or(delta.old_file().path()))
        .map(|path| path.display().to_string())
        .collect()
}

/// Raw status flags and path of every changed file, sorted
pub fn status_lines(dir: &Path) -> Vec<String> {
    let repository = open(dir);
    let mut options = git2::StatusOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(true);
    let statuses = repository
        .statuses(Some(&mut options))
        .expect("Failed to read status");

    let mut lines = statuses
        .iter()
        .map(|entry| format!("{:?} {}", entry.status(), entry.path().unwrap_or_default()))
        .collect::<Vec<_>>();
    lines.sort();
    lines
}

use crate::common::command::{init_repository_dir, run_unwip_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use crate::common::repository::{commit_all, head_id, head_message};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(5)]
fn unwind_consecutive_wip_commits(
    init_repository_dir: TempDir,
    #[case] wip_commits: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let prior_head = head_id(repository_dir.path());

    for i in 0..wip_commits {
        write_file(FileSpec::new(
            repository_dir.path().join("1.txt"),
            "x".repeat(i + 10),
        ));
        commit_all(repository_dir.path(), "wip");
    }

    let actual_output = stdout_of(run_unwip_command(repository_dir.path(), &[]))?;

    assert_eq!(
        actual_output,
        format!("Reverted HEAD to last non wip commit: {prior_head}\n")
    );
    assert_eq!(head_id(repository_dir.path()), prior_head);
    assert_eq!(head_message(repository_dir.path()), "Add 3.txt");

    Ok(())
}

//! Invocation settings
//!
//! The same program serves two command names: `git-wip` records a wip
//! commit, `git-unwip` unwinds them. The name only supplies the default of
//! `--unwip`; the resolved [`Mode`] is all the engine ever sees.

use crate::areas::repository::ResetMode;
use crate::artifacts::checkpoint::Mode;
use clap::Parser;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Executable name of the restore form
pub const UNWIP_COMMAND: &str = "git-unwip";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "git-wip",
    version = "0.1.0",
    about = "Checkpoint work in progress as wip commits",
    long_about = "Records all changes to tracked files in a commit with the message \"wip\". \
    With --unwip (or when invoked as git-unwip), resets HEAD to the last commit \
    that is not a wip commit instead.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
pub struct Cli {
    #[arg(long, help = "Report what would be committed without creating a commit")]
    pub dry_run: bool,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Unpack wip commits [default: true as git-unwip, false otherwise]"
    )]
    pub unwip: Option<bool>,

    #[arg(long, help = "When unpacking, keep working tree contents (reset index and HEAD only)")]
    pub mixed: bool,

    #[arg(
        short = 'C',
        value_name = "PATH",
        default_value = ".",
        help = "Run as if started in <PATH>"
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Settings {
    pub mode: Mode,
    pub repository_path: PathBuf,
}

impl Settings {
    /// Resolve the run mode from the invocation name and parsed flags
    pub fn resolve(invocation: &str, cli: Cli) -> Self {
        let unwip = cli.unwip.unwrap_or(invocation == UNWIP_COMMAND);

        let mode = if unwip {
            if cli.dry_run {
                warn!("--dry-run has no effect when unpacking wip commits");
            }
            let reset = if cli.mixed {
                ResetMode::Mixed
            } else {
                ResetMode::Hard
            };
            Mode::Restore { reset }
        } else {
            if cli.mixed {
                warn!("--mixed only applies when unpacking wip commits");
            }
            Mode::Checkpoint {
                dry_run: cli.dry_run,
            }
        };

        Settings::new(mode, cli.path)
    }
}

/// Command name of the running executable, without directory or `.exe`
pub fn invocation_name(argv0: &str) -> String {
    let name = Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    name.strip_suffix(".exe").map(str::to_string).unwrap_or(name)
}

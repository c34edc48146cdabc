//! Command runners
//!
//! Both command names (`git-wip`, `git-unwip`) end up here with a resolved
//! [`Settings`]: open the repository, run the engine in the selected mode and
//! print the outcome. Failures are returned untouched so the entry point can
//! report them.

use crate::areas::repository::GitRepository;
use crate::artifacts::checkpoint::Engine;
use crate::artifacts::checkpoint::outcome::Outcome;
use crate::config::Settings;
use anyhow::Context;
use std::io::Write;
use tracing::debug;

pub fn run(settings: &Settings, writer: &mut dyn Write) -> anyhow::Result<Outcome> {
    let repository = GitRepository::open(&settings.repository_path)?;
    debug!(mode = ?settings.mode, "running engine");

    let outcome = Engine::new(&repository, settings.mode).run()?;

    writeln!(writer, "{outcome}").context("failed to write to stdout")?;

    Ok(outcome)
}

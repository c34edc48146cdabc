//! Process entry point shared by both binaries

use crate::commands;
use crate::config::{Cli, Settings, invocation_name};
use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `GIT_WIP_LOG=debug`
pub const LOG_ENV: &str = "GIT_WIP_LOG";

pub fn main() -> ExitCode {
    init_logging();

    let argv0 = std::env::args().next().unwrap_or_default();
    let settings = Settings::resolve(&invocation_name(&argv0), Cli::parse());

    let stdout = std::io::stdout();
    match commands::run(&settings, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr and are off unless `GIT_WIP_LOG` is set
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn report(error: &anyhow::Error) {
    let stderr = std::io::stderr();
    colored::control::set_override(stderr.is_terminal());

    eprintln!("{} {:#}", "error:".red().bold(), error);
}

use std::process::ExitCode;

fn main() -> ExitCode {
    git_wip::cli::main()
}

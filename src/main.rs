//! `clowder-env <command> [args...]`
//!
//! Exports the Clowder runtime configuration as environment variables and
//! runs `command` with them. Exits 1 if Clowder is not enabled or the
//! command fails, 0 otherwise.
//!
//! The launcher has no flags of its own; argv after the binary name is the
//! subcommand, verbatim.

use std::process::ExitCode;

use clowder_env::observability::logging;
use clowder_env::{ClowderProvider, Launcher, ProcessSpawner};

fn main() -> ExitCode {
    logging::init();

    let launcher = Launcher::new(ClowderProvider::from_env(), ProcessSpawner);

    match launcher.run_args(std::env::args_os().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Launcher failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

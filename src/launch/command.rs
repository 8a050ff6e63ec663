//! Subcommand construction and process spawning.

use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::env::Environment;

/// Errors raised while launching the subcommand.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No command was given on the command line.
    #[error("no command given; usage: clowder-env <command> [args...]")]
    MissingCommand,

    /// The executable could not be started.
    #[error("failed to start {program:?}: {source}")]
    Spawn {
        program: OsString,
        #[source]
        source: std::io::Error,
    },

    /// The subcommand ran but did not exit successfully.
    #[error("{program:?} failed: {status}")]
    ExitStatus { program: OsString, status: ExitStatus },
}

/// The program to run and its arguments, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    /// First item is the executable, the rest are its arguments.
    pub fn from_args<I, T>(argv: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().ok_or(LaunchError::MissingCommand)?;
        Ok(Self {
            program,
            args: argv.collect(),
        })
    }
}

/// Runs a subcommand to completion.
pub trait Spawner {
    /// Run `command` with exactly `env`, blocking until it exits.
    ///
    /// A non-successful exit is an error.
    fn run(&self, command: &LaunchCommand, env: &Environment) -> Result<(), LaunchError>;
}

/// Spawns a real child process sharing the launcher's stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn run(&self, command: &LaunchCommand, env: &Environment) -> Result<(), LaunchError> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .env_clear()
            .envs(env.resolved())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        tracing::debug!(program = ?command.program, %status, "Subcommand exited");

        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program: command.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

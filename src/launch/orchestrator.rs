//! Gate, synthesize, launch.

use std::ffi::OsString;

use thiserror::Error;

use crate::config::{ConfigError, ConfigProvider};
use crate::env::{synthesize, Environment};
use crate::launch::command::{LaunchCommand, LaunchError, Spawner};

/// Exit status the launcher uses for every failure.
pub const EXIT_FAILURE: u8 = 1;

/// Terminal launcher errors.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No recognized runtime configuration is active.
    #[error("Clowder not enabled - exiting")]
    NotEnabled,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error running command: {0}")]
    Launch(#[from] LaunchError),
}

impl LauncherError {
    /// Process exit code for this error. The child's own code is not
    /// propagated.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Runs a subcommand with the runtime configuration exported as env vars.
pub struct Launcher<P, S> {
    provider: P,
    spawner: S,
    inherited: Option<Vec<(OsString, OsString)>>,
}

impl<P: ConfigProvider, S: Spawner> Launcher<P, S> {
    pub fn new(provider: P, spawner: S) -> Self {
        Self {
            provider,
            spawner,
            inherited: None,
        }
    }

    /// Use `vars` as the inherited environment instead of the process's own.
    pub fn with_inherited_env(mut self, vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        self.inherited = Some(vars.into_iter().collect());
        self
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Check availability, load the config and compose the child environment.
    pub fn environment(&self) -> Result<Environment, LauncherError> {
        if !self.provider.is_enabled() {
            return Err(LauncherError::NotEnabled);
        }

        let config = self.provider.load()?;
        let synthesized = synthesize(&config);

        tracing::debug!(
            keys = ?synthesized.iter().map(|v| v.key.as_str()).collect::<Vec<_>>(),
            "Synthesized environment"
        );

        Ok(match &self.inherited {
            Some(vars) => Environment::new(vars.iter().cloned(), synthesized),
            None => Environment::from_process(synthesized),
        })
    }

    /// Run `command` to completion.
    pub fn run(&self, command: &LaunchCommand) -> Result<(), LauncherError> {
        let env = self.environment()?;
        self.launch(command, &env)
    }

    /// Run raw argv (program first). Availability is checked before argv is
    /// looked at, so a disabled runtime wins over a missing command.
    pub fn run_args<I, T>(&self, argv: I) -> Result<(), LauncherError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let env = self.environment()?;
        let command = LaunchCommand::from_args(argv)?;
        self.launch(&command, &env)
    }

    fn launch(&self, command: &LaunchCommand, env: &Environment) -> Result<(), LauncherError> {
        tracing::info!(
            program = ?command.program,
            args = command.args.len(),
            synthesized = env.synthesized().len(),
            "Launching subcommand"
        );

        self.spawner.run(command, env)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticProvider;
    use crate::env::tests::sample_config;
    use std::cell::RefCell;
    use std::ffi::OsStr;

    /// Records every launch instead of spawning.
    #[derive(Default)]
    struct RecordingSpawner {
        launches: RefCell<Vec<(LaunchCommand, Vec<(OsString, OsString)>)>>,
        fail_with: Option<i32>,
    }

    impl Spawner for RecordingSpawner {
        fn run(&self, command: &LaunchCommand, env: &Environment) -> Result<(), LaunchError> {
            self.launches
                .borrow_mut()
                .push((command.clone(), env.resolved()));
            match self.fail_with {
                Some(code) => Err(LaunchError::Spawn {
                    program: command.program.clone(),
                    source: std::io::Error::from_raw_os_error(code),
                }),
                None => Ok(()),
            }
        }
    }

    fn command() -> LaunchCommand {
        LaunchCommand::from_args(["./app", "serve"]).unwrap()
    }

    fn lookup<'a>(env: &'a [(OsString, OsString)], key: &str) -> Option<&'a OsStr> {
        env.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    #[test]
    fn test_not_enabled_does_not_spawn() {
        let launcher = Launcher::new(StaticProvider::disabled(), RecordingSpawner::default());

        let err = launcher.run(&command()).unwrap_err();
        assert!(matches!(err, LauncherError::NotEnabled));
        assert_eq!(err.exit_code(), 1);
        assert!(launcher.spawner().launches.borrow().is_empty());
    }

    #[test]
    fn test_run_passes_config_to_child() {
        let launcher = Launcher::new(
            StaticProvider::enabled(sample_config()),
            RecordingSpawner::default(),
        )
        .with_inherited_env(vec![("HOME".into(), "/home/app".into())]);

        launcher.run(&command()).unwrap();

        let launches = launcher.spawner().launches.borrow();
        assert_eq!(launches.len(), 1);
        let (cmd, env) = &launches[0];
        assert_eq!(cmd, &command());
        assert_eq!(lookup(env, "HOME"), Some(OsStr::new("/home/app")));
        assert_eq!(lookup(env, "DATABASE_HOST"), Some(OsStr::new("db.example.svc")));
        assert_eq!(lookup(env, "KAFKA_BROKERS"), Some(OsStr::new("kafka-0:9092,kafka-1:9093")));
        assert_eq!(lookup(env, "IN_MEMORY_USER"), None);
    }

    #[test]
    fn test_synthesized_overrides_inherited() {
        let launcher = Launcher::new(
            StaticProvider::enabled(sample_config()),
            RecordingSpawner::default(),
        )
        .with_inherited_env(vec![("DATABASE_HOST".into(), "localhost".into())]);

        let env = launcher.environment().unwrap();
        assert_eq!(env.len(), 1 + env.synthesized().len());

        let resolved = env.resolved();
        assert_eq!(lookup(&resolved, "DATABASE_HOST"), Some(OsStr::new("db.example.svc")));
    }

    #[test]
    fn test_gate_checked_before_argv() {
        let launcher = Launcher::new(StaticProvider::disabled(), RecordingSpawner::default());
        let err = launcher.run_args(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, LauncherError::NotEnabled));

        let launcher = Launcher::new(
            StaticProvider::enabled(sample_config()),
            RecordingSpawner::default(),
        );
        let err = launcher.run_args(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, LauncherError::Launch(LaunchError::MissingCommand)));
        assert!(launcher.spawner().launches.borrow().is_empty());
    }

    #[test]
    fn test_launch_failure_maps_to_exit_one() {
        let spawner = RecordingSpawner {
            fail_with: Some(2),
            ..Default::default()
        };
        let launcher = Launcher::new(StaticProvider::enabled(sample_config()), spawner);

        let err = launcher.run(&command()).unwrap_err();
        assert!(matches!(err, LauncherError::Launch(LaunchError::Spawn { .. })));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("Error running command"));
    }
}

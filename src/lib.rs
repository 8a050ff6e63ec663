//! Clowder environment launcher.
//!
//! Reads the runtime configuration that Clowder mounts into a pod, turns it
//! into conventional environment variables and runs a subcommand with them.
//!
//! ```text
//!   ACG_CONFIG ──▶ config ──▶ env::synthesize ──▶ launch ──▶ child process
//!                (AppConfig)   (Vec<EnvVar>)     (Environment)
//! ```

pub mod config;
pub mod env;
pub mod launch;
pub mod observability;

pub use config::{AppConfig, ClowderProvider, ConfigProvider};
pub use env::{synthesize, EnvVar, Environment};
pub use launch::{LaunchCommand, Launcher, LauncherError, ProcessSpawner};

//! Subcommand launch.
//!
//! # Data Flow
//! ```text
//! argv[1..]
//!     → command.rs (LaunchCommand: program + untouched args)
//!
//! orchestrator.rs:
//!     provider.is_enabled()? ── no ──▶ LauncherError::NotEnabled (exit 1)
//!     → provider.load()
//!     → env::synthesize()
//!     → Environment (inherited ++ synthesized)
//!     → Spawner::run (blocking, shared stdio)
//!     → non-zero exit ──▶ LaunchError::ExitStatus (exit 1)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential, one child, no retries, no timeout
//! - The child's exit code is not forwarded; the launcher exits 0 or 1
//! - Spawning sits behind a trait so the gate can be tested without a child

pub mod command;
pub mod orchestrator;

pub use command::{LaunchCommand, LaunchError, ProcessSpawner, Spawner};
pub use orchestrator::{Launcher, LauncherError, EXIT_FAILURE};

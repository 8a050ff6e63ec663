//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured events via `tracing`; nothing is written to stdout
//! - Variable keys may be logged, values never (they carry credentials)

pub mod logging;

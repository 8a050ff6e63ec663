//! Environment synthesis.
//!
//! # Data Flow
//! ```text
//! &AppConfig
//!     → database.rs    (8 fixed DATABASE_* / PGSSLMODE vars)
//!     → in_memory.rs   (IN_MEMORY_HOST/PORT, optional USER/PASSWORD)
//!     → kafka.rs       (KAFKA_BROKERS, one TOPIC_NAME_* per topic)
//!     → cloudwatch.rs  (4 CW_* vars)
//!     → Vec<EnvVar>    (concatenated in that order)
//!     → environment.rs (appended to the inherited process env)
//! ```
//!
//! # Design Decisions
//! - Producers are pure functions of the config; same input, same output
//! - Absent optional fields produce no variable, not an empty one
//! - Duplicate keys are kept; precedence is decided once, in `Environment`

pub mod cloudwatch;
pub mod database;
pub mod environment;
pub mod in_memory;
pub mod kafka;
pub mod var;

pub use cloudwatch::cloudwatch_env;
pub use database::database_env;
pub use environment::Environment;
pub use in_memory::in_memory_env;
pub use kafka::{kafka_brokers_env, kafka_topics_env};
pub use var::EnvVar;

use crate::config::AppConfig;

/// Build every variable derived from `config`, in launch order.
pub fn synthesize(config: &AppConfig) -> Vec<EnvVar> {
    let mut env = database_env(&config.database);
    env.extend(in_memory_env(&config.in_memory_db));
    env.push(kafka_brokers_env(&config.kafka.brokers));
    env.extend(kafka_topics_env(&config.kafka.topics));
    env.extend(cloudwatch_env(&config.logging.cloudwatch));
    env
}

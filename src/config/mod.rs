//! Runtime configuration subsystem.
//!
//! # Data Flow
//! ```text
//! ACG_CONFIG (path to the Clowder JSON document)
//!     → provider.rs (is a runtime config active?)
//!     → loader.rs (read & deserialize)
//!     → AppConfig (immutable, borrowed by the env producers)
//! ```
//!
//! # Design Decisions
//! - The provider is passed to the launcher explicitly, never read as a global
//! - No semantic validation beyond what the schema types enforce
//! - Optional credentials are `Option`, never empty-string sentinels

pub mod loader;
pub mod provider;
pub mod schema;

pub use loader::ConfigError;
pub use provider::{ClowderProvider, ConfigProvider, StaticProvider};
pub use schema::AppConfig;
pub use schema::BrokerConfig;
pub use schema::CloudWatchConfig;
pub use schema::DatabaseConfig;
pub use schema::InMemoryDbConfig;
pub use schema::KafkaConfig;
pub use schema::LoggingConfig;
pub use schema::TopicConfig;

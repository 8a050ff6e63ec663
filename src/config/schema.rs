//! Configuration schema definitions.
//!
//! Mirrors the subset of the Clowder `AppConfig` document that the launcher
//! translates into environment variables. Keys are camelCase on the wire;
//! anything not modelled here is ignored during deserialization.

use serde::Deserialize;

/// Root of the platform-supplied runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Database credentials and endpoint.
    pub database: DatabaseConfig,

    /// In-memory store (cache) endpoint.
    pub in_memory_db: InMemoryDbConfig,

    /// Kafka brokers and topic mappings.
    #[serde(default)]
    pub kafka: KafkaConfig,

    /// Log shipping settings.
    pub logging: LoggingConfig,
}

/// Database configuration. Every field is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub hostname: String,
    pub port: u16,
    pub ssl_mode: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub admin_username: String,
    pub admin_password: String,
}

/// In-memory store configuration.
///
/// Credentials are optional; an absent value is `None`, which is distinct
/// from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryDbConfig {
    pub hostname: String,
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

/// Kafka configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KafkaConfig {
    /// Brokers in the order the platform listed them.
    pub brokers: Vec<BrokerConfig>,

    /// Topic mappings in the order the platform listed them.
    pub topics: Vec<TopicConfig>,
}

/// A single Kafka broker endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrokerConfig {
    pub hostname: String,

    /// Required. A broker entry without a port fails to load.
    pub port: u16,
}

/// Pairing of the topic name an app asked for with the provisioned one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicConfig {
    /// Name the application requested.
    pub requested_name: String,

    /// Name the platform actually provisioned.
    pub name: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub cloudwatch: CloudWatchConfig,
}

/// CloudWatch log group credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudWatchConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub log_group: String,
    pub region: String,
}

//! Kafka brokers and topic names.

use crate::config::{BrokerConfig, TopicConfig};
use crate::env::EnvVar;

pub const KAFKA_BROKERS: &str = "KAFKA_BROKERS";
pub const TOPIC_NAME_PREFIX: &str = "TOPIC_NAME_";

/// One variable holding `host:port` pairs joined by `,`.
///
/// An empty broker list still yields the variable, with an empty value.
pub fn kafka_brokers_env(brokers: &[BrokerConfig]) -> EnvVar {
    let value = brokers
        .iter()
        .map(|b| format!("{}:{}", b.hostname, b.port))
        .collect::<Vec<_>>()
        .join(",");
    EnvVar::new(KAFKA_BROKERS, value)
}

/// One `TOPIC_NAME_<requested>=<provisioned>` variable per topic.
///
/// Duplicate requested names are passed through as-is.
pub fn kafka_topics_env(topics: &[TopicConfig]) -> Vec<EnvVar> {
    topics
        .iter()
        .map(|t| EnvVar::new(format!("{TOPIC_NAME_PREFIX}{}", t.requested_name), &t.name))
        .collect()
}

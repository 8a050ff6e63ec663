//! In-memory store (cache) credentials.

use crate::config::InMemoryDbConfig;
use crate::env::EnvVar;

pub const IN_MEMORY_HOST: &str = "IN_MEMORY_HOST";
pub const IN_MEMORY_PORT: &str = "IN_MEMORY_PORT";
pub const IN_MEMORY_USER: &str = "IN_MEMORY_USER";
pub const IN_MEMORY_PASSWORD: &str = "IN_MEMORY_PASSWORD";

/// Host and port always; user and password only when configured.
pub fn in_memory_env(in_memory: &InMemoryDbConfig) -> Vec<EnvVar> {
    let mut env = vec![
        EnvVar::new(IN_MEMORY_HOST, &in_memory.hostname),
        EnvVar::new(IN_MEMORY_PORT, in_memory.port),
    ];

    if let Some(username) = &in_memory.username {
        env.push(EnvVar::new(IN_MEMORY_USER, username));
    }

    if let Some(password) = &in_memory.password {
        env.push(EnvVar::new(IN_MEMORY_PASSWORD, password));
    }

    env
}

//! Database credentials.

use crate::config::DatabaseConfig;
use crate::env::EnvVar;

pub const DATABASE_HOST: &str = "DATABASE_HOST";
pub const DATABASE_PORT: &str = "DATABASE_PORT";
pub const PGSSLMODE: &str = "PGSSLMODE";
pub const DATABASE_NAME: &str = "DATABASE_NAME";
pub const DATABASE_USER: &str = "DATABASE_USER";
pub const DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
pub const DATABASE_ADMIN_USER: &str = "DATABASE_ADMIN_USER";
pub const DATABASE_ADMIN_PASSWORD: &str = "DATABASE_ADMIN_PASSWORD";

/// Always exactly eight entries, in a fixed key order.
pub fn database_env(db: &DatabaseConfig) -> Vec<EnvVar> {
    vec![
        EnvVar::new(DATABASE_HOST, &db.hostname),
        EnvVar::new(DATABASE_PORT, db.port),
        EnvVar::new(PGSSLMODE, &db.ssl_mode),
        EnvVar::new(DATABASE_NAME, &db.name),
        EnvVar::new(DATABASE_USER, &db.username),
        EnvVar::new(DATABASE_PASSWORD, &db.password),
        EnvVar::new(DATABASE_ADMIN_USER, &db.admin_username),
        EnvVar::new(DATABASE_ADMIN_PASSWORD, &db.admin_password),
    ]
}

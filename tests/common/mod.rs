//! Shared fixtures for launcher integration tests.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// A complete Clowder document with both in-memory credentials absent.
pub const APP_CONFIG: &str = r#"{
    "publicPort": 8000,
    "metricsPort": 9000,
    "database": {
        "hostname": "inventory-db.ephemeral.svc",
        "port": 5432,
        "sslMode": "disable",
        "name": "inventory",
        "username": "app",
        "password": "app-secret",
        "adminUsername": "postgres",
        "adminPassword": "admin-secret"
    },
    "inMemoryDb": { "hostname": "inventory-redis.ephemeral.svc", "port": 6379 },
    "kafka": {
        "brokers": [
            { "hostname": "kafka-0.ephemeral.svc", "port": 9092 },
            { "hostname": "kafka-1.ephemeral.svc", "port": 9093 }
        ],
        "topics": [
            { "requestedName": "platform.inventory.events", "name": "platform.inventory.events-abc" }
        ]
    },
    "logging": {
        "type": "cloudwatch",
        "cloudwatch": {
            "accessKeyId": "AKIAEXAMPLE",
            "secretAccessKey": "cw-secret",
            "logGroup": "inventory",
            "region": "us-east-1"
        }
    }
}"#;

/// Write `content` to a temp file usable as `ACG_CONFIG`.
pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// The launcher binary with a clean `ACG_CONFIG`.
pub fn launcher() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clowder-env"));
    cmd.env_remove("ACG_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Run the launcher against `config` with `argv` as the subcommand.
pub fn run_with_config(config: &NamedTempFile, argv: &[&str]) -> Output {
    launcher()
        .env("ACG_CONFIG", config.path())
        .args(argv)
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

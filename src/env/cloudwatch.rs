//! CloudWatch log shipping credentials.

use crate::config::CloudWatchConfig;
use crate::env::EnvVar;

pub const CW_ACCESS_KEY_ID: &str = "CW_ACCESS_KEY_ID";
pub const CW_SECRET_ACCESS_KEY: &str = "CW_SECRET_ACCESS_KEY";
pub const CW_LOG_GROUP: &str = "CW_LOG_GROUP";
pub const CW_REGION: &str = "CW_REGION";

pub fn cloudwatch_env(cw: &CloudWatchConfig) -> Vec<EnvVar> {
    vec![
        EnvVar::new(CW_ACCESS_KEY_ID, &cw.access_key_id),
        EnvVar::new(CW_SECRET_ACCESS_KEY, &cw.secret_access_key),
        EnvVar::new(CW_LOG_GROUP, &cw.log_group),
        EnvVar::new(CW_REGION, &cw.region),
    ]
}

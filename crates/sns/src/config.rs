//! Configuration for the SNS plugin.

use serde::{Deserialize, Serialize};

use pulsenotify_core::config::{env_opt, env_u32, required_env, ConfigError};

/// Default AWS region for SNS publishes.
const DEFAULT_REGION: &str = "us-west-2";

/// Default number of publish attempts per notification.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Configuration for the SNS plugin, read from environment variables.
///
/// The topic ARN is required; its absence aborts plugin startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsConfig {
    /// ARN of the topic to publish to.
    pub topic_arn: String,
    /// AWS region for the SNS client.
    pub region: String,
    /// Publish attempts per notification before giving up.
    pub max_attempts: u32,
}

impl SnsConfig {
    /// Build config from environment variables.
    ///
    /// Reads the required `SNS_ARN`. `SNS_REGION` falls back to
    /// `AWS_REGION` before using the default. `SNS_MAX_ATTEMPTS`
    /// overrides the attempt bound.
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = env_opt("SNS_REGION")
            .or_else(|| env_opt("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            topic_arn: required_env("SNS_ARN")?,
            region,
            max_attempts: env_u32("SNS_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env-based tests must run serially to avoid interfering with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_sns_env() {
        for k in ["SNS_ARN", "SNS_REGION", "AWS_REGION", "SNS_MAX_ATTEMPTS"] {
            env::remove_var(k);
        }
    }

    #[test]
    fn defaults_when_only_arn_set() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_sns_env();

        env::set_var("SNS_ARN", "arn:aws:sns:us-west-2:123:alerts");

        let cfg = SnsConfig::from_env().unwrap();
        assert_eq!(cfg.topic_arn, "arn:aws:sns:us-west-2:123:alerts");
        assert_eq!(cfg.region, "us-west-2");
        assert_eq!(cfg.max_attempts, 5);

        clear_sns_env();
    }

    #[test]
    fn missing_arn_is_fatal() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_sns_env();

        let err = SnsConfig::from_env().unwrap_err();
        match err {
            ConfigError::MissingEnv(key) => assert_eq!(key, "SNS_ARN"),
            other => panic!("expected MissingEnv, got: {other:?}"),
        }
    }

    #[test]
    fn region_falls_back_to_aws_region() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_sns_env();

        env::set_var("SNS_ARN", "arn:aws:sns:eu-west-1:123:alerts");
        env::set_var("AWS_REGION", "eu-west-1");

        let cfg = SnsConfig::from_env().unwrap();
        assert_eq!(cfg.region, "eu-west-1");

        clear_sns_env();
    }

    #[test]
    fn sns_region_takes_precedence_over_aws_region() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_sns_env();

        env::set_var("SNS_ARN", "arn:aws:sns:eu-west-1:123:alerts");
        env::set_var("AWS_REGION", "us-east-1");
        env::set_var("SNS_REGION", "eu-west-1");

        let cfg = SnsConfig::from_env().unwrap();
        assert_eq!(cfg.region, "eu-west-1");

        clear_sns_env();
    }

    #[test]
    fn max_attempts_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_sns_env();

        env::set_var("SNS_ARN", "arn:aws:sns:us-west-2:123:alerts");
        env::set_var("SNS_MAX_ATTEMPTS", "3");

        let cfg = SnsConfig::from_env().unwrap();
        assert_eq!(cfg.max_attempts, 3);

        clear_sns_env();
    }
}

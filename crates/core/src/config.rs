//! Environment-based configuration loading shared by all plugins.

use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Errors raised while loading configuration from the environment.
///
/// These are fatal at construction time: a plugin that cannot resolve
/// its required variables must not be registered at all.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

pub fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

pub fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

/// Read a required env var; empty counts as unset.
pub fn required_env(key: &'static str) -> Result<String, ConfigError> {
    env_opt(key).ok_or(ConfigError::MissingEnv(key))
}

pub fn env_u32(key: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env_opt(key) {
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
            key,
            value: v.clone(),
        }),
        None => Ok(default),
    }
}

// ── AWS credentials ───────────────────────────────────────────

/// Static AWS credentials loaded once at plugin construction.
///
/// Both key fields are required; construction fails immediately when
/// either is absent rather than deferring the error to the first
/// notification attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl AwsCredentials {
    /// Read `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the
    /// optional `AWS_SESSION_TOKEN` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            access_key_id: required_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: required_env("AWS_SECRET_ACCESS_KEY")?,
            session_token: env_opt("AWS_SESSION_TOKEN"),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────

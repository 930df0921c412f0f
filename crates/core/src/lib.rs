//! Shared types for the pulsenotify plugin system.
//!
//! This crate provides:
//! - `TaskData` and `ExchangeConfig`, the host-side payloads every plugin receives
//! - `NotifyPlugin` trait for pluggable notification channels
//! - Environment-based configuration loading and AWS credentials

pub mod config;
pub mod exchange;
pub mod plugin;
pub mod task;

pub use config::{load_dotenv, AwsCredentials, ConfigError};
pub use exchange::ExchangeConfig;
pub use plugin::NotifyPlugin;
pub use task::{LogRecord, TaskData};

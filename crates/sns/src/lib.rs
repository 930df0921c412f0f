//! Amazon SNS plugin for the pulsenotify notification system.
//!
//! Publishes a notification message to a configured SNS topic,
//! retrying a bounded number of times on transient SDK errors.
//!
//! The following environment variables must be present for the plugin
//! to function:
//! - `AWS_ACCESS_KEY_ID`
//! - `AWS_SECRET_ACCESS_KEY`
//! - `SNS_ARN`

pub mod config;
pub mod message;
pub mod plugin;
pub mod publisher;

pub use config::SnsConfig;
pub use plugin::SnsPlugin;
pub use publisher::{PublishError, SnsPublisher, TopicPublisher};

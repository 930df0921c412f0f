//! The SNS notification plugin: format, publish, retry, log.

use std::time::Instant;

use tracing::{error, info, warn};

use pulsenotify_core::{AwsCredentials, ConfigError, ExchangeConfig, NotifyPlugin, TaskData};

use crate::config::SnsConfig;
use crate::message;
use crate::publisher::{SnsPublisher, TopicPublisher};

/// SNS plugin for the pulsenotify dispatch framework.
///
/// Holds only read-only state (topic config and a publisher), so the
/// host may run many `notify` calls concurrently on one instance.
/// Delivery failure is retried up to `max_attempts` times with no
/// backoff, then logged and swallowed; the host contract is
/// fire-and-forget.
pub struct SnsPlugin<P = SnsPublisher> {
    config: SnsConfig,
    publisher: P,
}

impl SnsPlugin<SnsPublisher> {
    /// Construct the plugin from the environment.
    ///
    /// Requires `SNS_ARN`, `AWS_ACCESS_KEY_ID` and
    /// `AWS_SECRET_ACCESS_KEY`; a missing variable aborts startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = SnsConfig::from_env()?;
        let credentials = AwsCredentials::from_env()?;
        let publisher = SnsPublisher::new(config.clone(), credentials);
        Ok(Self { config, publisher })
    }
}

impl<P: TopicPublisher> SnsPlugin<P> {
    /// Construct with a custom publisher (used by tests).
    pub fn with_publisher(config: SnsConfig, publisher: P) -> Self {
        Self { config, publisher }
    }
}

#[async_trait::async_trait]
impl<P: TopicPublisher> NotifyPlugin for SnsPlugin<P> {
    async fn notify(&self, task: &TaskData, exchange: &ExchangeConfig) {
        let body = message::build_body(exchange, task);
        let start = Instant::now();

        for attempt in 1..=self.config.max_attempts {
            match self.publisher.publish(&exchange.subject, &body).await {
                Ok(()) => {
                    info!(
                        task_id = %task.task_id,
                        attempt,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "notified with SNS"
                    );
                    return;
                }
                Err(e) => {
                    warn!(
                        task_id = %task.task_id,
                        attempt,
                        error = %e,
                        "SNS publish attempt failed"
                    );
                }
            }
        }

        error!(
            topic_arn = %self.config.topic_arn,
            task_id = %task.task_id,
            attempts = self.config.max_attempts,
            duration_ms = start.elapsed().as_millis() as u64,
            "could not notify via SNS, giving up"
        );
    }

    fn name(&self) -> &str {
        "sns"
    }
}

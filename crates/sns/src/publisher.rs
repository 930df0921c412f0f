//! Topic publish abstraction and its AWS SNS binding.

use aws_credential_types::Credentials;
use aws_sdk_sns::config::{BehaviorVersion, Region};
use aws_sdk_sns::Client as SnsClient;

use pulsenotify_core::AwsCredentials;

use crate::config::SnsConfig;

/// Errors reported by a topic publish attempt.
///
/// The provider contract has two outcomes: success, or a transient
/// failure worth retrying. SDK error detail is carried as text for
/// logging only, never branched on.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("SNS publish failed: {0}")]
    Transient(String),
}

/// One publish attempt against a pub/sub topic.
#[async_trait::async_trait]
pub trait TopicPublisher: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError>;
}

/// Publishes to an SNS topic using explicit static credentials.
///
/// A fresh SDK client is built on every attempt, so a handle poisoned
/// by an earlier failure is never reused across retries.
#[derive(Debug)]
pub struct SnsPublisher {
    config: SnsConfig,
    credentials: AwsCredentials,
}

impl SnsPublisher {
    pub fn new(config: SnsConfig, credentials: AwsCredentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Build an SNS client from the stored credentials and region.
    fn build_client(&self) -> SnsClient {
        let creds = Credentials::new(
            &self.credentials.access_key_id,
            &self.credentials.secret_access_key,
            self.credentials.session_token.clone(),
            None, // expiry
            "pulsenotify-sns",
        );

        let sdk_config = aws_sdk_sns::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.config.region.clone()))
            .credentials_provider(creds)
            .build();

        SnsClient::from_conf(sdk_config)
    }
}

#[async_trait::async_trait]
impl TopicPublisher for SnsPublisher {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError> {
        let client = self.build_client();

        client
            .publish()
            .topic_arn(&self.config.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| PublishError::Transient(e.to_string()))?;

        Ok(())
    }
}

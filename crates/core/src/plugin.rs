//! Plugin trait implemented by every notification channel.

use crate::exchange::ExchangeConfig;
use crate::task::TaskData;

/// Trait for notification channel plugins.
///
/// `notify` is fire-and-forget by host contract: delivery failure is
/// handled (and logged) inside the plugin and never surfaces to the
/// dispatcher. Implementations must be safe to call concurrently for
/// many tasks at once, so they hold no mutable state across calls.
#[async_trait::async_trait]
pub trait NotifyPlugin: Send + Sync {
    /// Deliver one notification for the given task.
    async fn notify(&self, task: &TaskData, exchange: &ExchangeConfig);

    /// Human-readable name for this channel (e.g., "sns").
    fn name(&self) -> &str;
}

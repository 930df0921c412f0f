//! Builds the published message body from exchange config and task data.

use pulsenotify_core::{ExchangeConfig, TaskData};

/// Lead-in line prepended to the joined log URLs.
const LOG_LEAD_IN: &str = "There should be some logs at ";

/// Build the message body for one notification.
///
/// Starts from the exchange's configured message. When the task
/// carries log references, appends the lead-in line followed by every
/// destination URL joined by newlines, in the order the host supplied
/// them. A present-but-empty log list still appends the lead-in.
pub fn build_body(exchange: &ExchangeConfig, task: &TaskData) -> String {
    let mut body = exchange.message.clone();
    if task.has_logs() {
        let joined = task
            .log_data()
            .iter()
            .map(|l| l.destination_url.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        body.push_str(&format!("\n{LOG_LEAD_IN}\n{joined}"));
    }
    body
}

//! sns-notify — send one SNS notification the way the dispatcher would.
//!
//! Stands in for the pulsenotify host during manual testing: builds
//! task data and exchange config from the command line (or a task JSON
//! file), constructs the plugin from the environment, and runs a single
//! notify call.
//!
//! Required environment: `SNS_ARN`, `AWS_ACCESS_KEY_ID`,
//! `AWS_SECRET_ACCESS_KEY`.

use clap::Parser;
use tracing::info;

use pulsenotify_core::{load_dotenv, ExchangeConfig, LogRecord, NotifyPlugin, TaskData};
use pulsenotify_sns::SnsPlugin;

// ── CLI ─────────────────────────────────────────────────────────────

/// Send one notification to the configured SNS topic.
#[derive(Parser, Debug)]
#[command(name = "sns-notify", version, about)]
struct Cli {
    /// Notification subject.
    #[arg(long, env = "SNS_SUBJECT")]
    subject: String,

    /// Notification message body.
    #[arg(long, env = "SNS_MESSAGE")]
    message: String,

    /// Task identifier included in log records.
    #[arg(long, default_value = "manual")]
    task_id: String,

    /// Log destination URL to append to the message (repeatable).
    #[arg(long = "log-url")]
    log_urls: Vec<String>,

    /// Read task data from a JSON file instead of --task-id/--log-url.
    #[arg(long, conflicts_with_all = ["task_id", "log_urls"])]
    task_file: Option<String>,
}

impl Cli {
    fn task_data(&self) -> anyhow::Result<TaskData> {
        if let Some(ref path) = self.task_file {
            let raw = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&raw)?);
        }

        let logs = if self.log_urls.is_empty() {
            None
        } else {
            Some(
                self.log_urls
                    .iter()
                    .map(|u| LogRecord {
                        destination_url: u.clone(),
                    })
                    .collect(),
            )
        };

        Ok(TaskData {
            task_id: self.task_id.clone(),
            logs,
        })
    }
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let task = cli.task_data()?;
    let exchange = ExchangeConfig {
        subject: cli.subject.clone(),
        message: cli.message.clone(),
    };

    let plugin = SnsPlugin::from_env()?;

    info!(task_id = %task.task_id, "dispatching notification");
    plugin.notify(&task, &exchange).await;

    Ok(())
}

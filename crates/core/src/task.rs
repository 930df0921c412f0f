//! Task result data handed to plugins by the host dispatcher.

use serde::{Deserialize, Serialize};

/// A reference to one uploaded task log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Where the log can be fetched from.
    pub destination_url: String,
}

/// Outcome data for the work item being reported on.
///
/// Delivered by the host as JSON; plugins only read it. `logs` is
/// `None` when the task produced no log artifacts at all, which is
/// distinct from an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskData {
    pub task_id: String,
    #[serde(default)]
    pub logs: Option<Vec<LogRecord>>,
}

impl TaskData {
    /// Whether the task carries any log references.
    pub fn has_logs(&self) -> bool {
        self.logs.is_some()
    }

    /// Log records in the order the host supplied them.
    pub fn log_data(&self) -> &[LogRecord] {
        self.logs.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_logs() {
        let task = TaskData {
            task_id: "t1".into(),
            logs: None,
        };
        assert!(!task.has_logs());
        assert!(task.log_data().is_empty());
    }

    #[test]
    fn present_but_empty_logs() {
        let task = TaskData {
            task_id: "t1".into(),
            logs: Some(vec![]),
        };
        assert!(task.has_logs());
        assert!(task.log_data().is_empty());
    }

    #[test]
    fn deserializes_host_json() {
        let task: TaskData = serde_json::from_str(
            r#"{"task_id": "abc123", "logs": [{"destination_url": "http://a"}]}"#,
        )
        .unwrap();
        assert_eq!(task.task_id, "abc123");
        assert_eq!(task.log_data()[0].destination_url, "http://a");
    }

    #[test]
    fn missing_logs_field_deserializes_as_none() {
        let task: TaskData = serde_json::from_str(r#"{"task_id": "abc123"}"#).unwrap();
        assert!(!task.has_logs());
    }
}

//! Per-exchange notification settings supplied by the host.

use serde::{Deserialize, Serialize};

/// Settings for one notification event.
///
/// The host guarantees `subject` and `message` are present; a payload
/// missing either is a caller contract violation and fails
/// deserialization. Extra keys in the source mapping are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_keys_ignored() {
        let cfg: ExchangeConfig = serde_json::from_str(
            r#"{"subject": "S", "message": "M", "routing_key": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(cfg.subject, "S");
        assert_eq!(cfg.message, "M");
    }

    #[test]
    fn missing_message_is_rejected() {
        let result: Result<ExchangeConfig, _> = serde_json::from_str(r#"{"subject": "S"}"#);
        assert!(result.is_err());
    }
}

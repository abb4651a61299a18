use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{require_non_blank, Validate};

/// One application log entry (`app_logs` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub uuid: String,
    /// When the event occurred, naive UTC
    #[serde(with = "crate::datetime::utc_format")]
    pub timestamp: NaiveDateTime,
    /// WARN, ERROR, ... (free-form)
    pub severity: String,
    pub application_id: String,
    /// Client, browser or runtime that produced the entry
    pub log_source: String,
    pub message: String,
}

impl Log {
    pub fn new(
        uuid: impl Into<String>,
        timestamp: NaiveDateTime,
        severity: impl Into<String>,
        application_id: impl Into<String>,
        log_source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            timestamp,
            severity: severity.into(),
            application_id: application_id.into(),
            log_source: log_source.into(),
            message: message.into(),
        }
    }

    /// Copy of this entry carrying a different identity
    pub fn with_uuid(&self, uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            ..self.clone()
        }
    }
}

impl Validate for Log {
    fn validate(&self) -> Result<()> {
        require_non_blank("uuid", &self.uuid, "Log id cannot be blank")?;
        require_non_blank("severity", &self.severity, "Log severity cannot be blank")?;
        require_non_blank(
            "application_id",
            &self.application_id,
            "Missing application id error",
        )?;
        require_non_blank("log_source", &self.log_source, "Log source cannot be blank")?;
        require_non_blank("message", &self.message, "Log message cannot be blank")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::parse_utc;
    use crate::error::StoreError;

    fn sample() -> Log {
        Log::new(
            "UUID1",
            parse_utc("2025-08-11 11:09:22 UTC").unwrap(),
            "WARN",
            "app-1",
            "Chrome LTS  version 132.0.6834.223",
            "Object not found exception",
        )
    }

    #[test]
    fn test_valid_log() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut log = sample();
        log.severity = " ".to_string();
        assert!(matches!(
            log.validate(),
            Err(StoreError::Validation { field: "severity", .. })
        ));

        let mut log = sample();
        log.message = String::new();
        assert!(matches!(
            log.validate(),
            Err(StoreError::Validation { field: "message", .. })
        ));

        let log = sample().with_uuid("");
        assert!(matches!(
            log.validate(),
            Err(StoreError::Validation { field: "uuid", .. })
        ));
    }

    #[test]
    fn test_serializes_boundary_timestamp() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["timestamp"], "2025-08-11 11:09:22 UTC");
        assert_eq!(json["applicationId"], "app-1");
        assert_eq!(json["logSource"], "Chrome LTS  version 132.0.6834.223");
    }
}

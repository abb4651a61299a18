use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{require_non_blank, Validate};

/// Key/value annotation attached to a root log (`logs_metadata` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMetadata {
    pub uuid: String,
    /// `uuid` of the owning log
    pub log_id: String,
    pub metadata_type: String,
    pub metadata_value: String,
}

impl LogMetadata {
    pub fn new(
        uuid: impl Into<String>,
        log_id: impl Into<String>,
        metadata_type: impl Into<String>,
        metadata_value: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            log_id: log_id.into(),
            metadata_type: metadata_type.into(),
            metadata_value: metadata_value.into(),
        }
    }

    pub fn with_uuid(&self, uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            ..self.clone()
        }
    }
}

impl Validate for LogMetadata {
    fn validate(&self) -> Result<()> {
        require_non_blank("uuid", &self.uuid, "Metadata id cannot be blank")?;
        require_non_blank("log_id", &self.log_id, "Metadata must reference a root log")?;
        require_non_blank(
            "metadata_type",
            &self.metadata_type,
            "Metadata type cannot be blank",
        )?;
        require_non_blank(
            "metadata_value",
            &self.metadata_value,
            "Metadata value cannot be blank",
        )?;
        Ok(())
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::validation::{require_canonical_uuid, require_non_blank, Validate};

/// Known values of `LogsDataSource::source_type`.
///
/// The column itself stays free-form; this only names the values callers create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Local,
    Api,
    Form,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Api => "API",
            Self::Form => "Form",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a log stream originates (`logs_data_sources` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsDataSource {
    /// Canonical hyphenated UUID
    pub uuid: String,
    pub name: String,
    pub source_type: String,
    pub application_id: String,
    #[serde(with = "crate::datetime::utc_format")]
    pub created_at: NaiveDateTime,
    pub log_file_path: Option<String>,
}

impl LogsDataSource {
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        source_type: impl Into<String>,
        application_id: impl Into<String>,
        created_at: NaiveDateTime,
        log_file_path: Option<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            source_type: source_type.into(),
            application_id: application_id.into(),
            created_at,
            log_file_path,
        }
    }

    pub fn with_uuid(&self, uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            ..self.clone()
        }
    }
}

impl Validate for LogsDataSource {
    fn validate(&self) -> Result<()> {
        require_canonical_uuid("uuid", &self.uuid, "Invalid log id format")?;
        require_non_blank("name", &self.name, "Data source name cannot be left blank")?;
        require_non_blank(
            "source_type",
            &self.source_type,
            "Data source type cannot be empty",
        )?;
        require_non_blank(
            "application_id",
            &self.application_id,
            "Missing application id error",
        )?;
        Ok(())
    }
}

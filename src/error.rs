use sqlx::error::ErrorKind;
use thiserror::Error;

/// Store layer error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field is blank or an identifier has the wrong format.
    /// Raised before any statement reaches the store.
    #[error("Validation error on '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// `update_by_id` targeted an identifier with no row
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Uniqueness, foreign-key, check or not-null violation reported by the store
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connectivity loss, timeout, malformed statement or any other store failure
    #[error("Store fault: {0}")]
    StoreFault(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable machine-readable name for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::ConstraintViolation(_) => "constraint_violation",
            Self::StoreFault(_) => "store_fault",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                return Self::ConstraintViolation(db_err.message().to_string());
            }
        }
        Self::StoreFault(err)
    }
}

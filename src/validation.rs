//! Required-field and identifier checks applied before persistence

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, StoreError};

static CANONICAL_UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("canonical uuid pattern is valid")
});

/// Entities that can check their own required fields
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Fail with `message` when `value` is empty or whitespace only
pub fn require_non_blank(field: &'static str, value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(field, message));
    }
    Ok(())
}

/// True when `value` is a hyphenated RFC 4122 identifier (versions 1-5)
pub fn is_canonical_uuid(value: &str) -> bool {
    CANONICAL_UUID_RE.is_match(value)
}

pub fn require_canonical_uuid(field: &'static str, value: &str, message: &str) -> Result<()> {
    if !is_canonical_uuid(value) {
        return Err(StoreError::validation(field, message));
    }
    Ok(())
}

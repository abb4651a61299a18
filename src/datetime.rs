//! Boundary representation of timestamps
//!
//! Entities hold timezone-naive `NaiveDateTime` values that are assumed to be UTC.
//! Whenever a timestamp leaves the store layer it is rendered as
//! `YYYY-MM-DD HH:MM:SS UTC`, and parsed back from that form on the way in.

use chrono::NaiveDateTime;

/// `2025-08-11 11:09:22 UTC`
pub const UTC_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Parse a `YYYY-MM-DD HH:MM:SS UTC` string into a naive UTC date-time
pub fn parse_utc(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), UTC_FORMAT)
}

/// Render a naive UTC date-time as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_utc(value: &NaiveDateTime) -> String {
    value.format(UTC_FORMAT).to_string()
}

/// Serde adapter for timestamp fields, used as `#[serde(with = "crate::datetime::utc_format")]`
pub mod utc_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_utc(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc(&raw).map_err(serde::de::Error::custom)
    }
}

//! Serde adapter for publication dates.
//!
//! The API emits RFC 3339 timestamps, but older records come back without an
//! offset (`"2025-01-15T09:30:00"`) or as a bare date (`"2025-01-15"`). The
//! offset of a timestamp is kept so the calendar date stays the one the API
//! sent. Naive values get a zero offset. Serialization always writes RFC 3339.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{self, Deserialize, Deserializer, Serializer};

#[allow(clippy::missing_errors_doc)]
pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

#[allow(clippy::missing_errors_doc)]
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}")))
}

/// Parse any accepted date shape, keeping the offset when one is given.
#[must_use]
pub fn parse(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

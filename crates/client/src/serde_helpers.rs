//! Serde helpers for the API's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Decode fields that are `false` when unset and a timestamp otherwise (`edited`).
//! - Convert epoch-second floats into `chrono` datetimes.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrTimestamp {
    Bool(bool),
    Timestamp(f64),
}

/// `false` → `None`, `true` → `Some(0.0)` (edited, time unknown), number → `Some(ts)`.
pub fn edited_timestamp<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<BoolOrTimestamp>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(BoolOrTimestamp::Bool(false)) => None,
        Some(BoolOrTimestamp::Bool(true)) => Some(0.0),
        Some(BoolOrTimestamp::Timestamp(ts)) => Some(ts),
    })
}

/// Convert epoch seconds into a UTC datetime.
pub fn to_datetime(epoch_seconds: f64) -> Option<DateTime<Utc>> {
    if !epoch_seconds.is_finite() {
        return None;
    }
    let secs = epoch_seconds.trunc() as i64;
    let nanos = ((epoch_seconds.fract()) * 1e9).round() as u32;
    DateTime::from_timestamp(secs, nanos.min(999_999_999))
}

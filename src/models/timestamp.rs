//! UTC timestamps as fractional epoch seconds
//!
//! Deposit and balance records store their creation time as a JSON number of
//! seconds since the Unix epoch with microsecond resolution.

use chrono::{DateTime, Utc};

/// Seconds since the Unix epoch, microseconds in the fraction
pub fn epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

/// [`epoch_seconds`] of the current instant
pub fn now_epoch_seconds() -> f64 {
    epoch_seconds(Utc::now())
}

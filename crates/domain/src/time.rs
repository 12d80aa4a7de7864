//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, FixedOffset};

/// Controller timestamp as sent on the wire (RFC 3339 with offset).
pub type Timestamp = DateTime<FixedOffset>;

/// Whether the controller sent its "never happened" placeholder.
///
/// The controller serialises unset times as `0001-01-01T00:00:00Z`.
#[must_use]
pub fn is_unset(ts: &Timestamp) -> bool {
    ts.year() <= 1
}

/// Human readable form of an optional controller timestamp.
#[must_use]
pub fn describe(ts: Option<&Timestamp>) -> String {
    match ts {
        Some(ts) if !is_unset(ts) => ts.to_rfc3339(),
        _ => "never".to_string(),
    }
}

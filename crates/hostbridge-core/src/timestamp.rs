//! Formatted wall-clock timestamps
//!
//! The embedded application expects the time as a human-readable string in
//! the shape browsers print dates, e.g. `Sat Aug 30 2026 14:03:07 GMT+0000`.
//! A timestamp is produced fresh on every request and never cached.

use chrono::{DateTime, FixedOffset, Local, ParseError};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Strftime format for [`Timestamp`]
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// A formatted local datetime, as delivered on the `now` channel and in the
/// startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Format a local datetime
    pub fn from_datetime(dt: DateTime<Local>) -> Self {
        Self(dt.format(TIMESTAMP_FORMAT).to_string())
    }

    /// The formatted string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse back into a datetime
    pub fn parse(&self) -> Result<DateTime<FixedOffset>, ParseError> {
        Self::parse_str(&self.0)
    }

    /// Parse any string under the timestamp format
    pub fn parse_str(s: &str) -> Result<DateTime<FixedOffset>, ParseError> {
        DateTime::parse_from_str(s, TIMESTAMP_FORMAT)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::ordering::{OrderKey, range_start};

/// Display format for valid timestamps. Parses back through `parse_added_on`.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%A, %-d %B %Y %H:%M:%S GMT%:z";

/// The "Added on" date of a clipping
///
/// Unparseable dates are not an error: the raw text is kept so it can be
/// written back out, but it never yields an epoch value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Valid(DateTime<FixedOffset>),
    Invalid(String),
}

impl Timestamp {
    pub fn is_valid(&self) -> bool {
        matches!(self, Timestamp::Valid(_))
    }

    /// Milliseconds since the Unix epoch, if the date was understood
    pub fn epoch_millis(&self) -> Option<i64> {
        match self {
            Timestamp::Valid(dt) => Some(dt.timestamp_millis()),
            Timestamp::Invalid(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Valid(dt) => write!(f, "{}", dt.format(TIMESTAMP_DISPLAY_FORMAT)),
            Timestamp::Invalid(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clipping {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "time", serialize_with = "crate::models::serializers::serialize_timestamp")]
    pub timestamp: Timestamp,
    #[serde(serialize_with = "crate::models::serializers::serialize_order_key")]
    pub order: OrderKey,
    pub content: String,
}

impl Clipping {
    /// First number of a `186-190` style location range
    pub fn location_start(&self) -> Option<&str> {
        self.location.as_deref().map(range_start)
    }
}

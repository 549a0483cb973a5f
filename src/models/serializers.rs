use chrono::{SecondsFormat, Utc};
use serde::Serializer;

use crate::models::Timestamp;
use crate::ordering::OrderKey;

/// Custom serializer for timestamps: RFC3339 in UTC with milliseconds, `null` when invalid
pub fn serialize_timestamp<S>(timestamp: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Timestamp::Valid(dt) => serializer
            .serialize_str(&dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)),
        Timestamp::Invalid(_) => serializer.serialize_none(),
    }
}

/// Custom serializer for order keys: the numeric key, `null` for unranked clippings
pub fn serialize_order_key<S>(order: &OrderKey, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match order.value() {
        Some(value) => serializer.serialize_i64(value),
        None => serializer.serialize_none(),
    }
}

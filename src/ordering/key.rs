use std::num::IntErrorKind;

use tracing::debug;

use crate::models::Timestamp;

/// Sort key of a clipping, tagged with the field it was taken from
///
/// Keys from different sources are compared by their numeric value only,
/// so a page number and an epoch time share one axis within a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    Page(i64),
    Location(i64),
    /// Milliseconds since the Unix epoch
    Time(i64),
    /// None of page, location or time is usable
    Unranked,
}

impl OrderKey {
    pub fn value(&self) -> Option<i64> {
        match *self {
            OrderKey::Page(n) | OrderKey::Location(n) | OrderKey::Time(n) => Some(n),
            OrderKey::Unranked => None,
        }
    }

    /// Ranked keys ascend by value; unranked keys sort after all of them
    pub fn sort_rank(&self) -> (bool, i64) {
        match self.value() {
            Some(n) => (false, n),
            None => (true, 0),
        }
    }
}

/// Resolve the order key: page beats location start beats time
pub fn resolve_order_key(
    page: Option<&str>,
    location_start: Option<&str>,
    timestamp: &Timestamp,
) -> OrderKey {
    page.and_then(parse_position)
        .map(OrderKey::Page)
        .or_else(|| location_start.and_then(parse_position).map(OrderKey::Location))
        .or_else(|| timestamp.epoch_millis().map(OrderKey::Time))
        .unwrap_or(OrderKey::Unranked)
}

/// First number of a `186-190` style range
pub fn range_start(location: &str) -> &str {
    location.split('-').next().unwrap_or(location)
}

/// Numbers too large for an `i64` saturate, so they still rank by their field
fn parse_position(value: &str) -> Option<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            debug!(value, "position out of range, clamping to the largest key");
            Some(i64::MAX)
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn invalid_time() -> Timestamp {
        Timestamp::Invalid("not a date".to_string())
    }

    #[test]
    fn test_page_beats_location() {
        let key = resolve_order_key(Some("5"), Some("100"), &invalid_time());
        assert_eq!(key, OrderKey::Page(5));
        assert_eq!(key.value(), Some(5));
    }

    #[test]
    fn test_location_beats_time() {
        let time = Timestamp::Valid(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap().fixed_offset());
        assert_eq!(resolve_order_key(None, Some("186"), &time), OrderKey::Location(186));
    }

    #[test]
    fn test_falls_back_to_epoch_millis() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let time = Timestamp::Valid(dt.fixed_offset());
        assert_eq!(resolve_order_key(None, None, &time), OrderKey::Time(dt.timestamp_millis()));
    }

    #[test]
    fn test_non_numeric_fields_are_skipped() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let time = Timestamp::Valid(dt.fixed_offset());
        assert_eq!(resolve_order_key(Some("xii"), Some(""), &time), OrderKey::Time(dt.timestamp_millis()));
    }

    #[test]
    fn test_oversized_page_still_ranks_by_page() {
        let key = resolve_order_key(Some("99999999999999999999"), Some("5"), &invalid_time());
        assert_eq!(key, OrderKey::Page(i64::MAX));

        let key = resolve_order_key(None, Some("123456789012345678901234"), &invalid_time());
        assert_eq!(key, OrderKey::Location(i64::MAX));
        assert!(key.sort_rank() < OrderKey::Unranked.sort_rank());
    }

    #[test]
    fn test_unranked_when_nothing_usable() {
        let key = resolve_order_key(None, None, &invalid_time());
        assert_eq!(key, OrderKey::Unranked);
        assert_eq!(key.value(), None);
    }

    #[test]
    fn test_range_start() {
        assert_eq!(range_start("186-190"), "186");
        assert_eq!(range_start("42"), "42");
    }

    #[test]
    fn test_unranked_sorts_last() {
        assert!(OrderKey::Page(i64::MAX).sort_rank() < OrderKey::Unranked.sort_rank());
        assert!(OrderKey::Location(3).sort_rank() < OrderKey::Page(4).sort_rank());
    }
}

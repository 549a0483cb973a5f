//! Ordering and grouping of parsed clippings
//!
//! Kindle metadata is inconsistent: some clippings carry a page, most carry a
//! location, all carry an "Added on" date that may or may not parse. Each
//! clipping gets an [`OrderKey`] from the best field it has, and clippings are
//! then grouped per title and stable-sorted by that key.

pub mod grouping;
pub mod key;

pub use grouping::{group_by_title, sort_by_position};
pub use key::{OrderKey, range_start, resolve_order_key};

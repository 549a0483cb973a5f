//! Parsers for Kindle "My Clippings.txt" exports
//!
//! # Error Handling Strategy
//!
//! Unlike a log file, a clippings export is treated as all-or-nothing:
//!
//! - **Structural failures**: A block without a title and metadata line, or a
//!   metadata line that does not follow the `- <kind> ... Added on <date>`
//!   grammar, is a format error. Grouping downstream assumes every block parsed,
//!   so the caller aborts the whole run instead of skipping the block.
//!
//! - **Soft data errors**: A missing page or location, or an "Added on" date
//!   that cannot be understood, is not an error. The field is left empty (or the
//!   timestamp kept as [`Timestamp::Invalid`](crate::models::Timestamp)) and
//!   ordering falls back to whatever is left.

pub mod block;
pub mod dates;
pub mod metadata;

pub use block::{SECTION_SEPARATOR, parse_block};
pub use dates::parse_added_on;
pub use metadata::{Metadata, ends_with_page_clause, parse_metadata_line};

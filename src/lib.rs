//! Klipper - Parse and sort a Kindle "My Clippings.txt" export
//!
//! Kindle appends every highlight, note and bookmark to a single flat file.
//! This library splits that file back into per-book documents:
//!
//! - Parsing separator-delimited blocks into [`Clipping`] records
//! - Ordering each clipping by page, then location, then the "Added on" date
//! - Grouping clippings by book title
//! - Rendering each book as JSON, Kindle-style text or HTML
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use klipper::{OutputFormat, SECTION_SEPARATOR, convert, read_clippings, save_documents};
//!
//! let raw = read_clippings(Path::new("My Clippings.txt"))?;
//! let documents = convert(&raw, SECTION_SEPARATOR, OutputFormat::Html)?;
//! save_documents(Path::new("books"), &documents)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod errors;
pub mod models;
pub mod ordering;
pub mod parsers;
pub mod pipeline;
pub mod render;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use errors::{BlockError, ClipError, MetadataError};
pub use models::{Clipping, RenderedDocument, Timestamp};
pub use ordering::{OrderKey, group_by_title};
pub use parsers::{SECTION_SEPARATOR, parse_block};
pub use pipeline::convert;
pub use render::OutputFormat;
pub use storage::{read_clippings, save_documents};
pub use utils::format_path_with_tilde;

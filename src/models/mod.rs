//! Data models for Kindle clippings.
//!
//! - [`Clipping`] - One parsed highlight, note or bookmark
//! - [`Timestamp`] - The "Added on" date, kept even when it cannot be parsed
//! - [`RenderedDocument`] - One output file worth of rendered clippings for a title
//!
//! Serialization of the non-trivial fields lives in the `serializers` module.

pub mod clipping;
pub mod document;
pub mod serializers;

pub use clipping::{Clipping, Timestamp};
pub use document::RenderedDocument;

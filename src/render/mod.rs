//! Output formats for grouped clippings
//!
//! Every format is a pure function from a title and its ordered clippings to a
//! document body. [`OutputFormat`] selects one by name and tags the result with
//! the file extension it should be saved under.

pub mod html;
pub mod json;
pub mod kindle;

use std::fmt;
use std::str::FromStr;

use crate::errors::ClipError;
use crate::models::{Clipping, RenderedDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Array of clipping records, 3-space indented
    Json,
    /// Same shape as a Kindle "My Clippings.txt", CRLF line endings
    Kindle,
    /// Minimal standalone HTML page
    Html,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Kindle => "kindle",
            OutputFormat::Html => "html",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Kindle => "txt",
            OutputFormat::Html => "html",
        }
    }

    /// Render one title's clippings, already in display order
    pub fn render(self, title: &str, clippings: &[Clipping]) -> Result<RenderedDocument, ClipError> {
        let body = match self {
            OutputFormat::Json => json::render(title, clippings)?,
            OutputFormat::Kindle => kindle::render(title, clippings),
            OutputFormat::Html => html::render(title, clippings),
        };

        Ok(RenderedDocument::new(title, self.extension(), body))
    }
}

impl FromStr for OutputFormat {
    type Err = ClipError;

    /// Case-insensitive: `json`, `kindle` or `html`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "kindle" => Ok(OutputFormat::Kindle),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ClipError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

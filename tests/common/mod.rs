//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const DEFAULT_ADDED_ON: &str = "Sunday, 13 April 2014 10:02:01";

/// Builder for one clipping block in Kindle layout
pub struct ClippingBuilder {
    title: String,
    kind: String,
    page: Option<String>,
    location: Option<String>,
    added_on: String,
    content: String,
}

impl ClippingBuilder {
    /// Create a highlight with default values
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: "Highlight".to_string(),
            page: None,
            location: None,
            added_on: DEFAULT_ADDED_ON.to_string(),
            content: "Test excerpt".to_string(),
        }
    }

    /// Set the clipping type
    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    /// Set the page reference
    pub fn page(mut self, page: &str) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Set the location reference (single number or range)
    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Set the free text after "Added on"
    pub fn added_on(mut self, added_on: &str) -> Self {
        self.added_on = added_on.to_string();
        self
    }

    /// Set the excerpt text
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Render as a block, terminated by the separator line
    pub fn to_block(&self) -> String {
        let mut metadata = format!("- {}", self.kind);
        if let Some(page) = &self.page {
            metadata.push_str(&format!(" on Page {} |", page));
        }
        if let Some(location) = &self.location {
            metadata.push_str(&format!(" Loc. {} |", location));
        }
        metadata.push_str(&format!(" Added on {}", self.added_on));

        format!(
            "{}\r\n{}\r\n\r\n{}\r\n==========\r\n",
            self.title,
            metadata,
            self.content.replace('\n', "\r\n")
        )
    }
}

/// Concatenate clippings into a full export
pub fn clippings_text(clippings: &[ClippingBuilder]) -> String {
    clippings.iter().map(|c| c.to_block()).collect()
}

/// Builder for a temp directory holding a clippings export
pub struct ClippingsFileBuilder {
    temp_dir: TempDir,
    content: String,
}

impl ClippingsFileBuilder {
    /// Create a builder with an empty export
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, content: String::new() }
    }

    /// Append raw text to the export
    pub fn with_raw(mut self, content: &str) -> Self {
        self.content.push_str(content);
        self
    }

    /// Append clippings to the export
    pub fn with_clippings(mut self, clippings: &[ClippingBuilder]) -> Self {
        self.content.push_str(&clippings_text(clippings));
        self
    }

    /// Write "My Clippings.txt" and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        fs::write(self.temp_dir.path().join("My Clippings.txt"), &self.content)
            .expect("Failed to write My Clippings.txt");
        self.temp_dir
    }
}

impl Default for ClippingsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the export inside a directory built by [`ClippingsFileBuilder`]
pub fn clippings_path(dir: &Path) -> PathBuf {
    dir.join("My Clippings.txt")
}

/// Helper to create a realistic export with two books and mixed metadata
pub fn realistic_clippings() -> Vec<ClippingBuilder> {
    vec![
        ClippingBuilder::new("Dune (Frank Herbert)")
            .location("200-201")
            .content("I must not fear."),
        ClippingBuilder::new("Bűbájos bajok (Terry Pratchett)")
            .page("13")
            .location("186-190")
            .added_on("Monday, 21 April 14 17:34:53 GMT+02:01")
            .content("It was a wizard's staff."),
        ClippingBuilder::new("Dune (Frank Herbert)")
            .kind("Note")
            .location("50")
            .content("Fear is the mind-killer.\nFear is the little-death."),
        ClippingBuilder::new("Bűbájos bajok (Terry Pratchett)")
            .kind("Bookmark")
            .page("2")
            .content(""),
    ]
}

//! Conversion pipeline: raw clippings text in, one rendered document per title out.
//!
//! # Error Handling Strategy
//!
//! The pipeline is a batch: every block is parsed before anything is grouped,
//! and every group is rendered before anything is handed to storage. The first
//! malformed block aborts the run with [`ClipError::MalformedBlock`], carrying
//! the block's position in the file. There is no partial output.

use tracing::{debug, info, warn};

use crate::errors::ClipError;
use crate::models::{Clipping, RenderedDocument};
use crate::ordering::group_by_title;
use crate::parsers::parse_block;
use crate::render::OutputFormat;

/// Split the export into blocks, dropping whatever follows the last separator
///
/// A well-formed export ends with a separator line, so the final segment is
/// only the trailing newline. Text there is an unterminated block and is
/// ignored with a warning.
pub fn split_blocks<'a>(input: &'a str, separator: &str) -> Vec<&'a str> {
    let mut segments: Vec<&str> = input.split(separator).collect();

    if let Some(trailing) = segments.pop()
        && !trailing.trim().is_empty()
    {
        warn!(
            chars = trailing.trim().chars().count(),
            "Ignoring text after the last separator (unterminated clipping)"
        );
    }

    segments.into_iter().filter(|segment| !segment.trim().is_empty()).collect()
}

/// Parse every block of the export, failing on the first malformed one
pub fn parse_clippings(input: &str, separator: &str) -> Result<Vec<Clipping>, ClipError> {
    let blocks = split_blocks(input, separator);
    let mut clippings = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.into_iter().enumerate() {
        let clipping =
            parse_block(block).map_err(|source| ClipError::MalformedBlock { index: index + 1, source })?;
        clippings.push(clipping);
    }

    let unranked = clippings.iter().filter(|c| c.order.value().is_none()).count();
    if unranked > 0 {
        debug!(unranked, "Clippings without page, location or readable date sort last");
    }

    Ok(clippings)
}

/// Run the whole conversion over an in-memory export
///
/// Returns one [`RenderedDocument`] per distinct title, each holding that
/// title's clippings ordered by page, then location, then date.
///
/// # Errors
///
/// Returns [`ClipError::MalformedBlock`] for the first block that is not a
/// clipping, or [`ClipError::Serialize`] if a JSON document cannot be built.
///
/// # Examples
///
/// ```
/// use klipper::pipeline::convert;
/// use klipper::parsers::SECTION_SEPARATOR;
/// use klipper::render::OutputFormat;
///
/// let input = "Dune\r\n- Highlight Loc. 50 | Added on Sunday, 13 April 2014 10:02:01\r\n\r\nSpice\r\n==========\r\n";
/// let documents = convert(input, SECTION_SEPARATOR, OutputFormat::Html)?;
/// assert_eq!(documents.len(), 1);
/// assert_eq!(documents[0].file_name(), "Dune.html");
/// # Ok::<(), klipper::ClipError>(())
/// ```
pub fn convert(
    input: &str,
    separator: &str,
    format: OutputFormat,
) -> Result<Vec<RenderedDocument>, ClipError> {
    let clippings = parse_clippings(input, separator)?;
    let total = clippings.len();
    let groups = group_by_title(clippings);

    let documents = groups
        .iter()
        .map(|(title, group)| format.render(title, group))
        .collect::<Result<Vec<_>, _>>()?;

    info!(clippings = total, titles = documents.len(), %format, "Rendered clippings");

    Ok(documents)
}

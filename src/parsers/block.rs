use tracing::debug;

use crate::errors::BlockError;
use crate::models::Clipping;
use crate::ordering::{range_start, resolve_order_key};
use crate::parsers::dates::parse_added_on;
use crate::parsers::metadata::parse_metadata_line;

/// Line that closes every clipping in a Kindle export
pub const SECTION_SEPARATOR: &str = "==========";

/// Parse one separator-delimited block into a [`Clipping`]
///
/// The first line is the title, the second the metadata line, everything
/// after that is content. Both LF and CRLF line endings are accepted.
pub fn parse_block(block: &str) -> Result<Clipping, BlockError> {
    let lines: Vec<&str> = block.trim().lines().collect();
    if lines.len() < 2 {
        return Err(BlockError::Incomplete { lines: lines.len() });
    }

    let metadata = parse_metadata_line(lines[1])
        .map_err(|source| BlockError::Metadata { line: lines[1].to_string(), source })?;

    let timestamp = parse_added_on(&metadata.added_on);
    if !timestamp.is_valid() {
        debug!(title = lines[0], added_on = %metadata.added_on, "unparseable clipping date");
    }

    let order = resolve_order_key(
        metadata.page.as_deref(),
        metadata.location.as_deref().map(range_start),
        &timestamp,
    );

    Ok(Clipping {
        title: lines[0].to_string(),
        kind: metadata.kind,
        page: metadata.page,
        location: metadata.location,
        timestamp,
        order,
        content: lines[2..].join("\n").trim().to_string(),
    })
}

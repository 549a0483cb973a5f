//! Parser for the second line of a clipping block.
//!
//! # Grammar
//!
//! ```text
//! metadata := "-" kind [page_clause] [location_clause] ["|"] "Added on" [" " date]
//! page_clause := "on Page" digits "|"
//! location_clause := ("Loc." | "Location") digits ["-" digits] ["|"]
//! ```
//!
//! Both clauses are optional and independent. The kind is whatever text is left
//! before the first recognized clause, so a page reference that is not closed
//! by a pipe stays part of the kind. The line is read right to left: the date is
//! split off first, then the location clause, then the page clause.

use crate::errors::MetadataError;

const ADDED_ON_MARKER: &str = "Added on";
const PAGE_MARKERS: &[&str] = &["on Page", "on page"];
const LOCATION_MARKERS: &[&str] = &["Loc.", "Location"];

/// Fields of a metadata line, all taken verbatim from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub kind: String,
    pub page: Option<String>,
    pub location: Option<String>,
    pub added_on: String,
}

/// Parse `- <kind>[ on Page <page> |][ Loc. <location>][ |] Added on <date>`
pub fn parse_metadata_line(line: &str) -> Result<Metadata, MetadataError> {
    let descriptor = line.trim_start().strip_prefix('-').ok_or(MetadataError::MissingDash)?;

    // The date may be empty: "Added on" can end the line
    let marker = descriptor
        .match_indices(ADDED_ON_MARKER)
        .map(|(index, _)| index)
        .find(|&index| {
            let after = &descriptor[index + ADDED_ON_MARKER.len()..];
            after.chars().next().is_none_or(char::is_whitespace)
        })
        .ok_or(MetadataError::MissingAddedOn)?;
    let added_on = descriptor[marker + ADDED_ON_MARKER.len()..].trim().to_string();

    let mut rest = descriptor[..marker].trim_end();
    let mut pipe_closed = strip_pipe(&mut rest);

    let location = take_clause(&mut rest, LOCATION_MARKERS, true);
    if location.is_some() {
        pipe_closed = strip_pipe(&mut rest);
    }

    // A page clause only counts when a pipe follows its number
    let page = if pipe_closed { take_clause(&mut rest, PAGE_MARKERS, false) } else { None };

    let kind = rest.trim();
    if kind.is_empty() {
        return Err(MetadataError::EmptyKind);
    }

    Ok(Metadata { kind: kind.to_string(), page, location, added_on })
}

/// Strip one trailing `|`, reporting whether there was one
fn strip_pipe(rest: &mut &str) -> bool {
    match rest.strip_suffix('|') {
        Some(stripped) => {
            *rest = stripped.trim_end();
            true
        }
        None => false,
    }
}

/// Take a trailing `<marker> <number>` clause off `rest`
///
/// Leaves `rest` untouched when the tail is not a well-formed clause.
fn take_clause(rest: &mut &str, markers: &[&str], allow_range: bool) -> Option<String> {
    let number_len = rest
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || (allow_range && *c == '-'))
        .count();
    let (head, number) = rest.split_at(rest.len() - number_len);
    if !is_position(number, allow_range) {
        return None;
    }

    let head = head.trim_end();
    let marker = markers.iter().find(|marker| head.ends_with(*marker))?;
    *rest = head[..head.len() - marker.len()].trim_end();

    Some(number.to_string())
}

/// Whether `kind` ends in an `on Page <n>` clause that a closing pipe would claim
pub fn ends_with_page_clause(kind: &str) -> bool {
    let mut rest = kind.trim_end();
    take_clause(&mut rest, PAGE_MARKERS, false).is_some()
}

/// `\d+`, or `\d+(-\d+)?` when ranges are allowed
fn is_position(text: &str, allow_range: bool) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    match text.split_once('-') {
        Some((start, end)) if allow_range => all_digits(start) && all_digits(end),
        Some(_) => false,
        None => all_digits(text),
    }
}

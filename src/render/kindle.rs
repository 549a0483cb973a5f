use crate::models::Clipping;
use crate::parsers::{SECTION_SEPARATOR, ends_with_page_clause};

/// Kindle writes its clippings file with Windows line endings
pub const KINDLE_NEWLINE: &str = "\r\n";

/// Write clippings back out in the "My Clippings.txt" layout
pub fn render(title: &str, clippings: &[Clipping]) -> String {
    let mut out = String::new();

    for clipping in clippings {
        out.push_str(title);
        out.push_str(KINDLE_NEWLINE);
        out.push_str(&metadata_line(clipping));
        out.push_str(KINDLE_NEWLINE);
        out.push_str(KINDLE_NEWLINE);
        out.push_str(&clipping.content.replace('\n', KINDLE_NEWLINE));
        out.push_str(KINDLE_NEWLINE);
        out.push_str(SECTION_SEPARATOR);
        out.push_str(KINDLE_NEWLINE);
    }

    out
}

/// `- <kind>[ on Page <page> |][ Loc. <location> |][ |] Added on <date>`
fn metadata_line(clipping: &Clipping) -> String {
    let mut line = format!("- {}", clipping.kind);

    if let Some(page) = &clipping.page {
        line.push_str(&format!(" on Page {} |", page));
    }
    if let Some(location) = &clipping.location {
        line.push_str(&format!(" Loc. {} |", location));
    }
    // A pipe after an `on Page <n>` tail would turn it into a page clause
    let unplaced = clipping.page.is_none() && clipping.location.is_none();
    if unplaced && !ends_with_page_clause(&clipping.kind) {
        line.push_str(" |");
    }

    line.push_str(&format!(" Added on {}", clipping.timestamp));
    line
}

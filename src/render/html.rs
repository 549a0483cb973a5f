use crate::models::Clipping;

/// Render a standalone HTML page, one `<small>`/`<p>`/`<hr>` triple per clipping
///
/// Titles and content are inserted as-is, without HTML escaping.
pub fn render(title: &str, clippings: &[Clipping]) -> String {
    let mut out = format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>{title}</title></head><body>\n<h1>{title}</h1>\n"
    );

    for clipping in clippings {
        out.push_str(&format!("<small>{}</small>\n", summary(clipping)));
        out.push_str(&format!("<p>{}</p>\n", clipping.content.replace('\n', "<br>")));
        out.push_str("<hr>\n");
    }

    out.push_str("</body></html>\n");
    out
}

/// `kind | page: 13 | location: 186-190 | <date>`
fn summary(clipping: &Clipping) -> String {
    let mut parts = vec![clipping.kind.clone()];
    if let Some(page) = &clipping.page {
        parts.push(format!("page: {}", page));
    }
    if let Some(location) = &clipping.location {
        parts.push(format!("location: {}", location));
    }
    parts.push(clipping.timestamp.to_string());

    parts.join(" | ")
}

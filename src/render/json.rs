use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::errors::ClipError;
use crate::models::Clipping;

const INDENT: &[u8] = b"   ";

/// Serialize the group as a JSON array with 3-space indentation
pub fn render(title: &str, clippings: &[Clipping]) -> Result<String, ClipError> {
    let to_error = |source| ClipError::Serialize { title: title.to_string(), source };

    let mut serializer = Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(INDENT));
    clippings.serialize(&mut serializer).map_err(to_error)?;

    String::from_utf8(serializer.into_inner()).map_err(|e| to_error(serde_json::Error::custom(e)))
}

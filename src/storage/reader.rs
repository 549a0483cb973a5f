use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::validate_file_size;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a clippings export fully into memory
///
/// Kindle prefixes the file with a UTF-8 byte order mark; it is dropped so it
/// does not end up in the first title.
pub fn read_clippings(path: &Path) -> Result<String> {
    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open clippings file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read clippings file: {}", path.display()))?;

    match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_read_strips_byte_order_mark() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("\u{feff}Dune\r\n".as_bytes()).unwrap();

        assert_eq!(read_clippings(file.path()).unwrap(), "Dune\r\n");
    }

    #[test]
    fn test_read_without_byte_order_mark() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Dune\n").unwrap();

        assert_eq!(read_clippings(file.path()).unwrap(), "Dune\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_clippings(&dir.path().join("My Clippings.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open clippings file"));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = read_clippings(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read clippings file"));
    }
}

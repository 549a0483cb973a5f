use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size of a clippings export: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 64MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Checks that a document file name stays a single entry inside the output directory
///
/// Titles are used verbatim as file names. Rather than rewriting a title that
/// cannot be one, this reports it so nothing lands outside the output folder.
///
/// # Errors
///
/// Returns an error if the name is empty, is `.` or `..`, or contains a path
/// separator (`/` or `\`) or a NUL byte.
pub fn validate_document_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty() || file_name == "." || file_name == ".." {
        bail!("Invalid document file name: {:?}", file_name);
    }

    if file_name.contains(['/', '\\', '\0']) {
        bail!(
            "Title cannot be used as a file name (contains a path separator or NUL): {:?}",
            file_name
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use klipper::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/books");
/// // Returns "~/books" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_validate_file_size_small_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Dune").unwrap();
        assert!(validate_file_size(file.as_file(), file.path()).is_ok());
    }

    #[test]
    fn test_validate_document_file_name_accepts_titles() {
        assert!(validate_document_file_name("Dune (Frank Herbert).html").is_ok());
        assert!(validate_document_file_name("Bűbájos bajok (Terry Pratchett).txt").is_ok());
        assert!(validate_document_file_name("..hidden.json").is_ok());
    }

    #[test]
    fn test_validate_document_file_name_rejects_separators() {
        let err = validate_document_file_name("Either/Or.html").unwrap_err();
        assert!(err.to_string().contains("path separator"));
        assert!(validate_document_file_name("..\\evil.txt").is_err());
    }

    #[test]
    fn test_validate_document_file_name_rejects_special_entries() {
        assert!(validate_document_file_name("").is_err());
        assert!(validate_document_file_name(".").is_err());
        assert!(validate_document_file_name("..").is_err());
    }

    #[test]
    fn test_format_path_with_tilde() {
        // Test with explicit home directory (no unsafe needed)
        let path = PathBuf::from("/Users/testuser/books");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/books");

        // Path not under home
        let path2 = PathBuf::from("/opt/books");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/books");

        // Relative paths are left alone
        let path3 = PathBuf::from("./books/");
        let formatted3 = format_path_with_tilde_internal(&path3, Some("/Users/testuser"));
        assert_eq!(formatted3, "./books/");
    }
}

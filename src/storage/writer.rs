use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::models::RenderedDocument;
use crate::utils::validate_document_file_name;

/// Write every document into `output_dir`, creating it if missing
///
/// All file names are checked before the first write, so an unusable title
/// leaves the output directory untouched. Each file is written to a temp file
/// in the same directory and renamed into place. The temp name does not grow
/// with the title. Returns the paths written, in input order.
pub fn save_documents(output_dir: &Path, documents: &[RenderedDocument]) -> Result<Vec<PathBuf>> {
    let file_names = documents
        .iter()
        .map(|document| -> Result<String> {
            let file_name = document.file_name();
            validate_document_file_name(&file_name)?;
            Ok(file_name)
        })
        .collect::<Result<Vec<_>>>()?;

    if !output_dir.exists() {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;
    }

    let mut written = Vec::with_capacity(documents.len());
    for (document, file_name) in documents.iter().zip(file_names) {
        let path = output_dir.join(&file_name);

        let mut temp = NamedTempFile::new_in(output_dir).with_context(|| {
            format!("Failed to create temp file in {}", output_dir.display())
        })?;
        temp.write_all(document.body.as_bytes())
            .with_context(|| format!("Failed to write temp file: {}", temp.path().display()))?;
        temp.persist(&path)
            .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;

        debug!(path = %path.display(), bytes = document.body.len(), "Wrote document");
        written.push(path);
    }

    Ok(written)
}

//! Loading already-recognized text files as documents.
//!
//! Each file in the documents directory holds the text recognized from one
//! photographed program. Acquiring images and running recognition happens
//! upstream; this module only reads the results.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Document;

/// Loads every file in `dir` whose extension matches `extension` (case-insensitive).
///
/// Document ids are file names, and documents are returned sorted by id.
/// Empty files are kept so they still count toward the document total.
/// Subdirectories are ignored.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a matching file
/// cannot be read as UTF-8 text.
pub fn load_documents(dir: &Path, extension: &str) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read documents directory: {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();

        if !path.is_file() || !has_extension(&path, extension) {
            continue;
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        let id = entry.file_name().to_string_lossy().into_owned();

        documents.push(Document::new(id, text));
    }

    documents.sort_by(|a, b| a.id().cmp(b.id()));

    debug!(dir = %dir.display(), count = documents.len(), "loaded documents");

    Ok(documents)
}

/// Loads a single file as a document identified by its file name.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document::new(id, text))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

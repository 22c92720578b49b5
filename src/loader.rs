//! Loading plain-text documents from a knowledge-base directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::document::Document;
use crate::error::{ChatError, Result};

/// File extension recognized as a knowledge-base document.
const TEXT_EXTENSION: &str = "txt";

/// Load every `*.txt` file under `dir` as a [`Document`].
///
/// Each file becomes one document: the file stem is the document ID, the
/// file name the source label, and the full UTF-8 content the text.
/// Enumeration order follows the platform's directory order and is not
/// guaranteed stable. Entries without the `.txt` extension (including
/// subdirectories) are skipped.
///
/// # Errors
///
/// Returns [`ChatError::Loader`] if the directory cannot be read, or if any
/// matching file is unreadable or not valid UTF-8. A single bad file aborts
/// the whole load; an empty directory is not an error.
pub fn load_directory(dir: impl AsRef<Path>) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| ChatError::Loader {
        path: dir.display().to_string(),
        message: format!("failed to read directory: {e}"),
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ChatError::Loader {
            path: dir.display().to_string(),
            message: format!("failed to enumerate directory entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(TEXT_EXTENSION) {
            continue;
        }

        // read_to_string rejects non-UTF-8 content, which aborts the load.
        let text = fs::read_to_string(&path).map_err(|e| ChatError::Loader {
            path: path.display().to_string(),
            message: format!("failed to read file: {e}"),
        })?;

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.clone());

        debug!(source = %source, bytes = text.len(), "loaded document");
        documents.push(Document { id, text, source });
    }

    info!(document_count = documents.len(), dir = %dir.display(), "knowledge base loaded");
    Ok(documents)
}

// changelog reader

use super::types::ChangelogDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// read a changelog file into a document
pub fn parse_changelog<P: AsRef<Path>>(path: P) -> Result<ChangelogDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        "read changelog"
    );

    Ok(ChangelogDocument::from_content(&content))
}

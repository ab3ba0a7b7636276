// in-memory changelog edits

use super::types::{ChangelogDocument, VersionSection};
use crate::utils::version::VersionString;

/// check if the document has a line exactly equal to `# <version>`
pub fn has_version_heading(document: &ChangelogDocument, version: &VersionString) -> bool {
    let heading = version.heading();
    document.lines.iter().any(|line| *line == heading)
}

/// index where a new section goes: after the top heading, and after one
/// blank line if the heading is directly followed by one
pub fn insertion_index(document: &ChangelogDocument) -> usize {
    match document.lines.get(1) {
        Some(line) if line.is_empty() => 2,
        _ => 1,
    }
}

/// insert a section at the top of the document
///
/// returns the line index the section heading was written at
pub fn insert_section(document: &mut ChangelogDocument, section: &VersionSection) -> usize {
    let index = insertion_index(document).min(document.lines.len());
    document.lines.splice(index..index, section.to_lines());
    index
}

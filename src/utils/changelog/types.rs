// changelog data structures

use crate::utils::version::VersionString;
use std::fmt;
use std::path::{Path, PathBuf};

/// represents a single changelog entry (`* type: description`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub change_type: String, // feat, fix, chore, etc.
    pub description: String,
}

impl ChangelogEntry {
    pub fn new(change_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            change_type: change_type.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {}: {}", self.change_type, self.description)
    }
}

/// represents a version section: heading, entries and a trailing blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSection {
    pub version: VersionString,
    pub entries: Vec<ChangelogEntry>,
}

impl VersionSection {
    pub fn new(version: VersionString) -> Self {
        Self {
            version,
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: ChangelogEntry) {
        self.entries.push(entry);
    }

    /// lines of this section as they appear in the file
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(self.version.heading());
        lines.extend(self.entries.iter().map(ToString::to_string));
        lines.push(String::new());
        lines
    }
}

/// full changelog content as an ordered sequence of lines
///
/// lines are split on `\n` only, so [`ChangelogDocument::render`] reproduces
/// the original text exactly, including a trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    pub lines: Vec<String>,
}

impl ChangelogDocument {
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// result of a successful update run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// a new section was written to the changelog
    Updated {
        path: PathBuf,
        version: VersionString,
    },
    /// the changelog already had a heading for the version; nothing was written
    AlreadyPresent {
        path: PathBuf,
        version: VersionString,
    },
}

impl UpdateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            UpdateOutcome::Updated { path, .. } | UpdateOutcome::AlreadyPresent { path, .. } => {
                path
            }
        }
    }

    pub fn was_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOutcome::Updated { path, version } => write!(
                f,
                "Successfully updated {} with new version {}",
                path.display(),
                version
            ),
            UpdateOutcome::AlreadyPresent { path, version } => write!(
                f,
                "Version {} already exists in {}, skipping update",
                version,
                path.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = ChangelogEntry::new("chore", "bump nearcore to 2.1.0");
        assert_eq!(entry.to_string(), "* chore: bump nearcore to 2.1.0");
    }

    #[test]
    fn test_section_lines() {
        let mut section = VersionSection::new(VersionString::parse("1.1.0-2.1.0").unwrap());
        section.add_entry(ChangelogEntry::new("chore", "bump nearcore to 2.1.0"));

        assert_eq!(
            section.to_lines(),
            vec![
                "# 1.1.0-2.1.0".to_string(),
                "* chore: bump nearcore to 2.1.0".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_document_preserves_trailing_newline() {
        let content = "# Changelog\n\n# 1.0.0-2.0.0\n";
        let document = ChangelogDocument::from_content(content);
        assert_eq!(document.line_count(), 4);
        assert_eq!(document.lines[3], "");
        assert_eq!(document.render(), content);
    }

    #[test]
    fn test_document_keeps_carriage_returns() {
        let content = "# Changelog\r\n\r\n";
        let document = ChangelogDocument::from_content(content);
        assert_eq!(document.lines[0], "# Changelog\r");
        assert_eq!(document.render(), content);
    }

    #[test]
    fn test_outcome_messages() {
        let version = VersionString::parse("1.1.0-2.1.0").unwrap();
        let updated = UpdateOutcome::Updated {
            path: PathBuf::from("CHANGELOG.md"),
            version: version.clone(),
        };
        assert!(updated.was_updated());
        assert_eq!(
            updated.to_string(),
            "Successfully updated CHANGELOG.md with new version 1.1.0-2.1.0"
        );

        let skipped = UpdateOutcome::AlreadyPresent {
            path: PathBuf::from("CHANGELOG.md"),
            version,
        };
        assert!(!skipped.was_updated());
        assert_eq!(skipped.path(), Path::new("CHANGELOG.md"));
        assert_eq!(
            skipped.to_string(),
            "Version 1.1.0-2.1.0 already exists in CHANGELOG.md, skipping update"
        );
    }
}

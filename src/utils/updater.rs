use super::changelog::{
    ChangelogDocument, ChangelogEntry, UpdateOutcome, VersionSection, has_version_heading,
    insert_section, parse_changelog,
};
use super::config::UpdaterConfig;
use super::version::VersionString;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// inserts a release section at the top of a changelog
pub struct ChangelogUpdater {
    config: UpdaterConfig,
}

impl ChangelogUpdater {
    pub fn new(config: UpdaterConfig) -> Self {
        Self { config }
    }

    /// changelog location: `CHANGELOG_PATH` if set, the configured file name otherwise
    ///
    /// fails if nothing exists at the resolved path
    pub fn resolve_path(&self) -> Result<PathBuf> {
        let relative = match &self.config.changelog_path {
            Some(path) => path.clone(),
            None => PathBuf::from(&self.config.changelog.changelog_file_name),
        };
        let path = self.config.resolve(relative);

        if !path.exists() {
            return Err(Error::MissingFile { path });
        }

        Ok(path)
    }

    /// the configured version, validated
    pub fn target_version(&self) -> Result<VersionString> {
        self.config.target_version()
    }

    /// section added for a version: a single dependency bump entry
    pub fn build_section(&self, version: &VersionString) -> VersionSection {
        let changelog = &self.config.changelog;
        let mut section = VersionSection::new(version.clone());
        section.add_entry(ChangelogEntry::new(
            changelog.change_type.as_str(),
            changelog.bump_description(version.inner_version()),
        ));
        section
    }

    /// run the update once
    ///
    /// an existing heading for the version is a successful no-op
    pub fn run(&self) -> Result<UpdateOutcome> {
        let version = self.target_version()?;
        let path = self.resolve_path()?;
        let mut document = parse_changelog(&path)?;

        if has_version_heading(&document, &version) {
            tracing::info!(
                path = %path.display(),
                version = %version,
                "version already present, skipping"
            );
            return Ok(UpdateOutcome::AlreadyPresent { path, version });
        }

        let section = self.build_section(&version);
        let index = insert_section(&mut document, &section);
        tracing::debug!(index, lines = document.line_count(), "inserted version section");

        write_document(&path, &document)?;
        tracing::info!(
            path = %path.display(),
            version = %version,
            "changelog updated"
        );

        Ok(UpdateOutcome::Updated { path, version })
    }
}

/// overwrite the file's full content in place
///
/// symlinks are followed and the file keeps its inode, owner and mode
fn write_document(path: &Path, document: &ChangelogDocument) -> Result<()> {
    fs::write(path, document.render()).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

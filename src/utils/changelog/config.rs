// changelog configuration

use serde::Deserialize;

/// settings for locating the changelog and generating its entries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// name of the changelog file (default: "CHANGELOG.md")
    pub changelog_file_name: String,

    /// change type of the generated entry (default: "chore")
    pub change_type: String,

    /// name of the bumped dependency in the generated entry (default: "nearcore")
    pub dependency_name: String,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_file_name(mut self, name: impl Into<String>) -> Self {
        self.changelog_file_name = name.into();
        self
    }

    pub fn change_type(mut self, change_type: impl Into<String>) -> Self {
        self.change_type = change_type.into();
        self
    }

    pub fn dependency_name(mut self, name: impl Into<String>) -> Self {
        self.dependency_name = name.into();
        self
    }

    /// description text of the bump entry for the given dependency version
    pub fn bump_description(&self, inner_version: &str) -> String {
        format!("bump {} to {}", self.dependency_name, inner_version)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            changelog_file_name: "CHANGELOG.md".to_string(),
            change_type: "chore".to_string(),
            dependency_name: "nearcore".to_string(),
        }
    }
}

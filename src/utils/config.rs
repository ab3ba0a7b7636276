use super::changelog::ChangelogConfig;
use super::version::VersionString;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// environment variable holding the version to insert
pub const NEW_VERSION_VAR: &str = "NEW_VERSION";
/// environment variable overriding the changelog location
pub const CHANGELOG_PATH_VAR: &str = "CHANGELOG_PATH";
/// optional settings file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "changelog-bump.toml";

/// contents of `changelog-bump.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl FileConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// find configuration file in a directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

/// everything a single update run needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// version to insert (`NEW_VERSION`)
    pub new_version: Option<String>,

    /// explicit changelog location (`CHANGELOG_PATH`)
    pub changelog_path: Option<PathBuf>,

    /// directory relative paths are resolved against
    pub working_dir: PathBuf,

    pub changelog: ChangelogConfig,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            new_version: None,
            changelog_path: None,
            working_dir: PathBuf::from("."),
            changelog: ChangelogConfig::default(),
        }
    }
}

impl UpdaterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// read configuration through an arbitrary variable lookup
    ///
    /// empty values are treated the same as unset ones
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            new_version: non_empty(NEW_VERSION_VAR),
            changelog_path: non_empty(CHANGELOG_PATH_VAR).map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn new_version(mut self, version: impl Into<String>) -> Self {
        self.new_version = Some(version.into());
        self
    }

    pub fn changelog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.changelog_path = Some(path.into());
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn changelog_config(mut self, config: ChangelogConfig) -> Self {
        self.changelog = config;
        self
    }

    /// the configured version, validated
    pub fn target_version(&self) -> Result<VersionString> {
        let raw = self
            .new_version
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingVersion)?;

        VersionString::parse(raw)
    }

    /// resolve a path against the working directory
    ///
    /// paths are left as given when running from the current directory
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        if self.working_dir == Path::new(".") {
            path.as_ref().to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// merge `changelog-bump.toml` from the working directory, if present
    ///
    /// a file that exists but cannot be parsed is an error
    pub fn with_config_file(mut self) -> Result<Self> {
        if let Some(path) = FileConfig::find_config_file(&self.working_dir) {
            tracing::debug!(path = %path.display(), "loading config file");
            self.changelog = FileConfig::load_from_file(&path)?.changelog;
        }
        Ok(self)
    }
}

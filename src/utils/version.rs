// composite release version handling

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `<outer>-<inner>[-<tag>.<n>]`, e.g. `1.2.3-4.5.6` or `1.2.3-4.5.6-rc.1`
const VERSION_PATTERN: &str = r"^[0-9]+(\.[0-9]+)*-[0-9]+(\.[0-9]+)*(-[a-z]+\.[0-9]+)?$";

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version pattern is a valid regex"));

/// check whether a version string has the accepted format
///
/// empty strings are rejected
pub fn validate(version: &str) -> bool {
    if version.is_empty() {
        return false;
    }
    VERSION_RE.is_match(version)
}

/// everything after the first hyphen, or the whole string if there is none
pub fn extract_inner_version(version: &str) -> &str {
    match version.split_once('-') {
        Some((_, inner)) => inner,
        None => version,
    }
}

/// a release version that has passed [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString(String);

impl VersionString {
    pub fn parse(version: &str) -> Result<Self> {
        if !validate(version) {
            return Err(Error::InvalidVersionFormat {
                version: version.to_string(),
            });
        }
        Ok(Self(version.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// version of the embedded dependency (the part after the first hyphen)
    pub fn inner_version(&self) -> &str {
        extract_inner_version(&self.0)
    }

    /// the changelog heading line for this version
    pub fn heading(&self) -> String {
        format!("# {}", self.0)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for VersionString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_release_versions() {
        assert!(validate("1.2.3-4.5.6"));
        assert!(validate("0.1.0-2.3.0"));
        assert!(validate("1-2"));
        assert!(validate("10.20.30-40.50.60"));
    }

    #[test]
    fn test_validate_accepts_prerelease_tag() {
        assert!(validate("1.2.3-4.5.6-rc.1"));
        assert!(validate("1.2.3-4.5.6-beta.12"));
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(!validate(""));
        assert!(!validate("abc"));
        assert!(!validate("1.2.3"));
        assert!(!validate("1.2.3-"));
        assert!(!validate("-1.2.3"));
        assert!(!validate("1..2-3.4"));
        assert!(!validate(".1-2"));
        assert!(!validate("1.2.3-4.5.6-RC.1"));
        assert!(!validate("1.2.3-4.5.6-rc"));
        assert!(!validate("1.2.3-4.5.6-rc.1-x.2"));
        assert!(!validate("v1.2.3-4.5.6"));
        assert!(!validate("1.2.3-4.5.6\n"));
        assert!(!validate(" 1.2.3-4.5.6"));
    }

    #[test]
    fn test_extract_inner_version() {
        assert_eq!(extract_inner_version("1.0.0-2.3.4"), "2.3.4");
        assert_eq!(extract_inner_version("1.0.0"), "1.0.0");
        assert_eq!(extract_inner_version("1.0.0-2.3.4-rc.1"), "2.3.4-rc.1");
    }

    #[test]
    fn test_version_string_parse() {
        let version: VersionString = "1.1.0-2.1.0".parse().unwrap();
        assert_eq!(version.as_str(), "1.1.0-2.1.0");
        assert_eq!(version.inner_version(), "2.1.0");
        assert_eq!(version.heading(), "# 1.1.0-2.1.0");
        assert_eq!(version.to_string(), "1.1.0-2.1.0");
    }

    #[test]
    fn test_version_string_rejects_invalid() {
        let err = VersionString::parse("abc").unwrap_err();
        assert!(matches!(err, Error::InvalidVersionFormat { version } if version == "abc"));
    }
}

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    MissingFile {
        path: PathBuf,
    },
    MissingVersion,
    InvalidVersionFormat {
        version: String,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingFile { path } => {
                write!(f, "{} not found", path.display())
            }
            Error::MissingVersion => {
                write!(f, "NEW_VERSION environment variable must be set")
            }
            Error::InvalidVersionFormat { version } => {
                write!(
                    f,
                    "Invalid version format '{}'. Valid formats: 'x.y.z-a.b.c' or 'x.y.z-a.b.c-rc.n'",
                    version
                )
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::ConfigParse { path, source } => {
                write!(
                    f,
                    "failed to parse config file: {} ({})",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_message_lists_formats() {
        let err = Error::InvalidVersionFormat {
            version: "abc".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'abc'"));
        assert!(message.contains("x.y.z-a.b.c"));
        assert!(message.contains("x.y.z-a.b.c-rc.n"));
    }

    #[test]
    fn test_missing_file_message() {
        let err = Error::MissingFile {
            path: PathBuf::from("CHANGELOG.md"),
        };
        assert_eq!(err.to_string(), "CHANGELOG.md not found");
    }

    #[test]
    fn test_write_error_names_path_and_source() {
        use std::error::Error as _;

        let err = Error::FileWriteError {
            path: PathBuf::from("docs/CHANGELOG.md"),
            source: std::io::Error::other("read-only file system"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write file: docs/CHANGELOG.md (read-only file system)"
        );
        assert!(err.source().is_some());
    }
}

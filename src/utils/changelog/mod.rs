// changelog document module

pub mod config;
pub mod editor;
pub mod parser;
pub mod types;

pub use config::ChangelogConfig;
pub use editor::{has_version_heading, insert_section, insertion_index};
pub use parser::parse_changelog;
pub use types::{ChangelogDocument, ChangelogEntry, UpdateOutcome, VersionSection};

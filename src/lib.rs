pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, ChangelogDocument, ChangelogEntry, UpdateOutcome, VersionSection,
    has_version_heading, insert_section, insertion_index, parse_changelog,
};
pub use utils::config::{FileConfig, UpdaterConfig};
pub use utils::updater::ChangelogUpdater;
pub use utils::version::{VersionString, extract_inner_version, validate};

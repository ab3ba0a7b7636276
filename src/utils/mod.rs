pub mod changelog;
pub mod config;
pub mod updater;
pub mod version;

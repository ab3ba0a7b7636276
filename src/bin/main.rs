use anyhow::{Context, Result};
use changelog_bump::{ChangelogUpdater, UpdaterConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const ENV_HELP: &str = "\
environment:
  NEW_VERSION     version to insert (required), e.g. 1.2.3-4.5.6 or 1.2.3-4.5.6-rc.1
  CHANGELOG_PATH  changelog location (default: CHANGELOG.md)
  RUST_LOG        log filter (default: warn)";

#[derive(Parser)]
#[command(name = "changelog-bump")]
#[command(version, about = "insert a release section at the top of a changelog", long_about = None)]
#[command(after_help = ENV_HELP)]
struct Cli {}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = UpdaterConfig::from_env();
    // version errors are reported ahead of config file errors
    config.target_version()?;
    let config = config
        .with_config_file()
        .context("failed to load configuration")?;

    let outcome = ChangelogUpdater::new(config).run()?;
    println!("{}", outcome);

    Ok(())
}

use crate::args::Cli;
use directories::ProjectDirs;
use roster::api::{RosterApi, RosterPaths};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the config directory, mostly for tests.
const HOME_ENV: &str = "ROSTER_HOME";

pub(crate) fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("roster=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".roster"))
}

pub(crate) fn init_paths() -> RosterPaths {
    RosterPaths {
        config_dir: config_dir(),
    }
}

fn init_store(cli: &Cli, paths: &RosterPaths) -> Result<FileStore> {
    let config = RosterConfig::load(&paths.config_dir)?;

    let data_file = cli.file.clone().unwrap_or(config.data_file);
    let format = cli.format.unwrap_or(config.format);
    tracing::debug!(file = %data_file.display(), %format, "resolved data file");

    Ok(FileStore::new(data_file).with_format(format))
}

/// Opens the data file for a one-shot command. A file that cannot be parsed
/// is an error.
pub(crate) fn init_api(cli: &Cli, paths: &RosterPaths) -> Result<RosterApi<FileStore>> {
    RosterApi::open(init_store(cli, paths)?)
}

/// Opens the data file for an interactive session. A file that cannot be
/// parsed is reported at startup and left untouched at exit.
pub(crate) fn init_session_api(cli: &Cli, paths: &RosterPaths) -> Result<RosterApi<FileStore>> {
    Ok(RosterApi::open_read_only_on_error(init_store(cli, paths)?))
}

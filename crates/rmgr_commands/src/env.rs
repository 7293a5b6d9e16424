use rmgr_config::definitions::ENV_FILE;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of loading the env file. Kept around so it can be logged once
/// tracing has been installed.
#[derive(Debug, PartialEq, Eq)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing,
    Invalid(String),
}

impl EnvFile {
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!("loaded environment from {}", path.display()),
            Self::Missing => info!("No .env file found"),
            Self::Invalid(e) => warn!("could not load {ENV_FILE} file: {e}"),
        }
    }
}

/// Loads `.env` from `dir` into the process environment. Variables that are
/// already set keep their value.
pub fn load_env_file(dir: &Path) -> EnvFile {
    let path = dir.join(ENV_FILE);
    match dotenvy::from_path(&path) {
        Ok(()) => EnvFile::Loaded(path),
        Err(e) if e.not_found() => EnvFile::Missing,
        Err(e) => EnvFile::Invalid(e.to_string()),
    }
}

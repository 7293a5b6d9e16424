pub mod definitions;
mod git;
mod server;

pub use git::*;
pub use server::*;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RmgrConfig {
    #[serde(default)]
    pub server: RmgrServerConfig,

    #[serde(default)]
    pub git: RmgrGitConfig,

    /// Only ever set from the environment or the command line.
    #[serde(skip)]
    api_key: Option<String>,
}

impl RmgrConfig {
    pub fn default_path() -> Result<PathBuf> {
        let mut path = std::env::current_dir()?;
        path.push(definitions::TOOL_DIR);
        path.push(definitions::TOOL_DEFAULT_CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from an explicit file, or from the default
    /// location when present. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let path = Self::default_path()?;
                if path.is_file() {
                    Self::load_file(&path)
                } else {
                    debug!("no config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        debug!("loading config file from: {}", path.display());
        let content = read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| anyhow!(e))
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn debug_info(&self) {
        debug!("loaded configuration");
        debug!("server > host: {}", self.server.host);
        debug!("server > port: {}", self.server.port);
        debug!("git > executable: {}", self.git.executable);
        debug!("git > locking: {}", self.git.locking);
        debug!("git > branches: {}", self.git.branches);
        match self.api_key {
            Some(_) => debug!("api key: ********"),
            None => debug!("api key: not set, every request will be rejected"),
        }
    }
}

use crate::definitions;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Controls whether concurrent updates of the same working tree are serialized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockMode {
    /// Requests for the same path run their git commands concurrently.
    None,
    /// Fetch and reset for one path hold an exclusive lock on that path.
    #[default]
    PerPath,
}

impl Display for LockMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::PerPath => write!(f, "per-path"),
        }
    }
}

impl FromStr for LockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "per-path" => Ok(Self::PerPath),
            other => Err(format!(
                "unknown locking mode '{other}', expected 'none' or 'per-path'"
            )),
        }
    }
}

/// Controls which branch names are accepted before they reach git.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BranchPolicy {
    /// Only names that are valid git refnames.
    #[default]
    Strict,
    /// Any string, passed through untouched.
    Any,
}

impl Display for BranchPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl FromStr for BranchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "any" => Ok(Self::Any),
            other => Err(format!(
                "unknown branch policy '{other}', expected 'strict' or 'any'"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmgrGitConfig {
    #[serde(default = "RmgrGitConfig::default_executable")]
    pub executable: String,

    #[serde(default)]
    pub locking: LockMode,

    #[serde(default)]
    pub branches: BranchPolicy,
}

impl RmgrGitConfig {
    fn default_executable() -> String {
        definitions::DEFAULT_GIT_EXECUTABLE.to_owned()
    }
}

impl Default for RmgrGitConfig {
    fn default() -> Self {
        Self {
            executable: Self::default_executable(),
            locking: LockMode::default(),
            branches: BranchPolicy::default(),
        }
    }
}

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// A version-control command that could not be run or exited unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub status: String,
    pub output: String,
}

impl CommandFailure {
    pub fn new(status: &str, output: &str) -> Self {
        Self {
            status: status.to_owned(),
            output: output.trim().to_owned(),
        }
    }
}

impl Display for CommandFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.output.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{} - {}", self.status, self.output)
        }
    }
}

impl std::error::Error for CommandFailure {}

#[derive(Debug, Error)]
pub enum PullError {
    #[error("Invalid or missing API key")]
    Unauthorized,

    #[error("Invalid request payload")]
    InvalidPayload(String),

    #[error("Invalid branch name: {0}")]
    InvalidBranch(String),

    #[error("Repository path not found")]
    PathNotFound(PathBuf),

    #[error("Fetch failed: {0}")]
    Fetch(CommandFailure),

    #[error("Reset failed: {0}")]
    Reset(CommandFailure),

    #[error("Internal server error")]
    Internal(String),
}

mod cli;
#[cfg(any(test, feature = "testing"))]
mod fake;

pub use cli::*;
#[cfg(any(test, feature = "testing"))]
pub use fake::*;

use crate::CommandFailure;
use async_trait::async_trait;
use std::path::Path;

/// Combined stdout and stderr of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
}

/// The two version-control operations needed to bring a working tree in line
/// with its remote.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Fetches the `origin` remote of the repository at `path`.
    async fn fetch(&self, path: &Path) -> Result<CommandOutput, CommandFailure>;

    /// Resets the working tree at `path` to `origin/<branch>`, discarding any
    /// local changes.
    async fn reset_hard(
        &self,
        path: &Path,
        branch: &str,
    ) -> Result<CommandOutput, CommandFailure>;
}

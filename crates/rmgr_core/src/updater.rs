use crate::branch::is_valid_branch;
use crate::git::{GitCli, VersionControl};
use crate::{PathLocks, PullError};
use rmgr_config::{BranchPolicy, LockMode, RmgrGitConfig};
use rmgr_models::dtos::{PullRepoRequest, PullRepoResponse};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Brings a local working tree in line with `origin/<branch>` by fetching and
/// then hard resetting it.
pub struct RepoUpdater {
    vcs: Arc<dyn VersionControl>,
    locks: Option<PathLocks>,
    branches: BranchPolicy,
}

impl RepoUpdater {
    pub fn new(vcs: Arc<dyn VersionControl>, config: &RmgrGitConfig) -> Self {
        let locks = match config.locking {
            LockMode::PerPath => Some(PathLocks::new()),
            LockMode::None => None,
        };
        Self {
            vcs,
            locks,
            branches: config.branches,
        }
    }

    pub fn git(config: &RmgrGitConfig) -> Self {
        Self::new(Arc::new(GitCli::new(&config.executable)), config)
    }

    pub async fn pull(&self, request: &PullRepoRequest) -> Result<PullRepoResponse, PullError> {
        let branch = request.branch();
        if self.branches == BranchPolicy::Strict && !is_valid_branch(branch) {
            error!("Rejected branch name: {branch:?}");
            return Err(PullError::InvalidBranch(branch.to_owned()));
        }

        let path = Path::new(&request.path);
        if let Err(e) = tokio::fs::metadata(path).await {
            if e.kind() == ErrorKind::NotFound {
                error!("Repository path not found: {}", path.display());
                return Err(PullError::PathNotFound(path.to_path_buf()));
            }
            debug!("could not stat {}: {e}", path.display());
        }

        let _guard = match &self.locks {
            Some(locks) => Some(locks.lock(&lock_key(path).await).await),
            None => None,
        };

        debug!("fetching origin for {}", path.display());
        let fetch = self.vcs.fetch(path).await.map_err(|e| {
            error!("Fetch failed: {} - Output: {}", e.status, e.output);
            PullError::Fetch(e)
        })?;
        debug!("fetch output: {}", fetch.text);

        debug!("resetting {} to origin/{branch}", path.display());
        let reset = self.vcs.reset_hard(path, branch).await.map_err(|e| {
            error!("Reset failed: {} - Output: {}", e.status, e.output);
            PullError::Reset(e)
        })?;
        debug!("reset output: {}", reset.text);

        info!(
            "Successfully pulled repository at {} on branch {branch}",
            path.display()
        );
        Ok(PullRepoResponse::success(branch))
    }
}

async fn lock_key(path: &Path) -> PathBuf {
    tokio::fs::canonicalize(path)
        .await
        .unwrap_or_else(|_| path.to_path_buf())
}

use rmgr_config::definitions::DEFAULT_BRANCH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRepoRequest {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl PullRepoRequest {
    pub fn new(path: &str, branch: Option<&str>) -> Self {
        Self {
            path: path.to_owned(),
            branch: branch.map(|b| b.to_owned()),
        }
    }

    /// The requested branch, falling back to the default when absent or empty.
    pub fn branch(&self) -> &str {
        match self.branch.as_deref() {
            Some(branch) if !branch.is_empty() => branch,
            _ => DEFAULT_BRANCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRepoResponse {
    pub status: PullStatus,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl PullRepoResponse {
    pub const SUCCESS_MESSAGE: &'static str = "Repository successfully updated";

    pub fn success(branch: &str) -> Self {
        Self {
            status: PullStatus::Success,
            message: Self::SUCCESS_MESSAGE.to_owned(),
            branch: Some(branch.to_owned()),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: PullStatus::Error,
            message: message.to_owned(),
            branch: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PullStatus::Success
    }
}

use super::{CommandOutput, VersionControl};
use crate::CommandFailure;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Fetch { path: PathBuf },
    ResetHard { path: PathBuf, branch: String },
}

/// In-memory stand-in for git that records every call it receives.
#[derive(Debug, Default)]
pub struct FakeVcs {
    calls: Mutex<Vec<GitCall>>,
    fetch_failure: Option<String>,
    reset_failure: Option<String>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_fetch(mut self, output: &str) -> Self {
        self.fetch_failure = Some(output.to_owned());
        self
    }

    pub fn failing_reset(mut self, output: &str) -> Self {
        self.reset_failure = Some(output.to_owned());
        self
    }

    /// Makes every operation take `delay` so overlapping calls can be observed.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn record(
        &self,
        call: GitCall,
        failure: &Option<String>,
    ) -> Result<CommandOutput, CommandFailure> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match failure {
            Some(output) => Err(CommandFailure::new("exit status: 128", output)),
            None => Ok(CommandOutput::default()),
        }
    }
}

#[async_trait]
impl VersionControl for FakeVcs {
    async fn fetch(&self, path: &Path) -> Result<CommandOutput, CommandFailure> {
        let call = GitCall::Fetch {
            path: path.to_path_buf(),
        };
        self.record(call, &self.fetch_failure).await
    }

    async fn reset_hard(
        &self,
        path: &Path,
        branch: &str,
    ) -> Result<CommandOutput, CommandFailure> {
        let call = GitCall::ResetHard {
            path: path.to_path_buf(),
            branch: branch.to_owned(),
        };
        self.record(call, &self.reset_failure).await
    }
}

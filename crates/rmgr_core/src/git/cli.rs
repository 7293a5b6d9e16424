use super::{CommandOutput, VersionControl};
use crate::CommandFailure;
use async_trait::async_trait;
use rmgr_config::definitions::DEFAULT_REMOTE;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Runs the system git binary, one process per operation.
#[derive(Debug, Clone)]
pub struct GitCli {
    executable: String,
}

impl GitCli {
    pub fn new(executable: &str) -> Self {
        Self {
            executable: executable.to_owned(),
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("-C").arg(path);
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    async fn run(&self, mut cmd: Command) -> Result<CommandOutput, CommandFailure> {
        debug!("spawning {:?}", cmd.as_std());

        let output = cmd.output().await.map_err(|e| {
            CommandFailure::new(&format!("failed to run {}: {e}", self.executable), "")
        })?;

        let text = combined_output(&output);
        if output.status.success() {
            Ok(CommandOutput { text })
        } else {
            Err(CommandFailure::new(&output.status.to_string(), &text))
        }
    }
}

fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    match (stdout.trim(), stderr.trim()) {
        (out, "") => out.to_owned(),
        ("", err) => err.to_owned(),
        (out, err) => format!("{out}\n{err}"),
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn fetch(&self, path: &Path) -> Result<CommandOutput, CommandFailure> {
        let mut cmd = self.command(path);
        cmd.arg("fetch").arg(DEFAULT_REMOTE);
        self.run(cmd).await
    }

    async fn reset_hard(
        &self,
        path: &Path,
        branch: &str,
    ) -> Result<CommandOutput, CommandFailure> {
        let mut cmd = self.command(path);
        cmd.arg("reset")
            .arg("--hard")
            .arg(format!("{DEFAULT_REMOTE}/{branch}"));
        self.run(cmd).await
    }
}

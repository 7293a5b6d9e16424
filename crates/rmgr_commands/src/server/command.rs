use crate::command::RmgrCommand;
use actix_web::rt::System;
use anyhow::{Context, Result};
use clap::Args;
use rmgr_config::definitions::{ENV_API_KEY, ENV_CONFIG, ENV_HOST, ENV_PORT};
use rmgr_config::{BranchPolicy, LockMode, RmgrConfig};
use std::path::PathBuf;

#[derive(Args)]
#[command(about = "Start rmgr in server mode, listening for repository update requests")]
pub struct ServerCommand {
    #[arg(short = 'H', long = "host", env = ENV_HOST, help = "The server's host address")]
    host: Option<String>,

    // Parsed after the fact so an empty PORT falls back to the default.
    #[arg(short = 'P', long = "port", env = ENV_PORT, help = "The server's port")]
    port: Option<String>,

    #[arg(
        long = "api-key",
        env = ENV_API_KEY,
        hide_env_values = true,
        help = "The shared secret expected in the X-API-Key header"
    )]
    api_key: Option<String>,

    #[arg(short = 'c', long = "config", env = ENV_CONFIG, help = "Path to a yaml config file")]
    config: Option<String>,

    #[arg(long = "git", help = "The git executable to run")]
    git: Option<String>,

    #[arg(long = "locking", help = "Locking of concurrent updates: none or per-path")]
    locking: Option<LockMode>,

    #[arg(long = "branches", help = "Accepted branch names: strict or any")]
    branches: Option<BranchPolicy>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ServerCommand {
    fn config(self) -> Result<RmgrConfig> {
        let path = non_empty(self.config).map(PathBuf::from);
        let mut config = RmgrConfig::load(path.as_deref())?;
        if let Some(host) = non_empty(self.host) {
            config.server.host = host;
        }
        if let Some(port) = non_empty(self.port) {
            config.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid port '{port}'"))?;
        }
        if let Some(git) = non_empty(self.git) {
            config.git.executable = git;
        }
        if let Some(locking) = self.locking {
            config.git.locking = locking;
        }
        if let Some(branches) = self.branches {
            config.git.branches = branches;
        }
        Ok(config.with_api_key(self.api_key))
    }
}

impl RmgrCommand for ServerCommand {
    fn exec(self) -> Result<()> {
        let config = self.config()?;
        System::new().block_on(rmgr_server::start(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rmgr_config::definitions::{LOCAL_SERVER_HOST, LOCAL_SERVER_PORT};
    use serial_test::serial;
    use tempfile::NamedTempFile;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        server: ServerCommand,
    }

    fn parse(args: &[&str]) -> ServerCommand {
        let mut argv = vec!["server"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().server
    }

    fn config_file(content: &str) -> (NamedTempFile, String) {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        let path = file.path().display().to_string();
        (file, path)
    }

    #[test]
    #[serial]
    fn flags_override_config_file() {
        let (_file, path) = config_file(
            "server:\n    host: 10.0.0.1\n    port: 9000\n\
             git:\n    locking: none\n    branches: any\n",
        );

        let config = parse(&[
            "--config",
            &path,
            "-H",
            "127.0.0.1",
            "-P",
            "9100",
            "--api-key",
            "secret",
            "--git",
            "/usr/bin/git",
            "--locking",
            "per-path",
        ])
        .config()
        .unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:9100");
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.git.executable, "/usr/bin/git");
        assert_eq!(config.git.locking, LockMode::PerPath);
        assert_eq!(config.git.branches, BranchPolicy::Any);
    }

    #[test]
    #[serial]
    fn config_file_values_are_used_without_flags() {
        let (_file, path) =
            config_file("git:\n    executable: /opt/git/bin/git\n    branches: any\n");

        let config = parse(&["--config", &path, "--api-key", "secret"])
            .config()
            .unwrap();

        assert_eq!(config.git.executable, "/opt/git/bin/git");
        assert_eq!(config.git.branches, BranchPolicy::Any);
    }

    #[test]
    #[serial]
    fn empty_values_fall_back_to_defaults() {
        let (_file, path) = config_file("{}");

        let config = parse(&["--config", &path, "-H", "", "-P", "", "--api-key", ""])
            .config()
            .unwrap();

        assert_eq!(config.server.host, LOCAL_SERVER_HOST);
        assert_eq!(config.server.port, LOCAL_SERVER_PORT);
        assert!(config.api_key().is_none());
    }

    #[test]
    #[serial]
    fn empty_port_and_host_env_fall_back_to_defaults() {
        let (_file, path) = config_file("{}");

        // Tests touching the process environment are serialized.
        unsafe {
            std::env::set_var(ENV_PORT, "");
            std::env::set_var(ENV_HOST, "");
        }
        let result = Harness::try_parse_from(["server", "--config", &path]);
        unsafe {
            std::env::remove_var(ENV_PORT);
            std::env::remove_var(ENV_HOST);
        }

        let config = result.unwrap().server.config().unwrap();
        assert_eq!(config.server.host, LOCAL_SERVER_HOST);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    #[serial]
    fn port_env_is_used_when_set() {
        let (_file, path) = config_file("{}");

        unsafe {
            std::env::set_var(ENV_PORT, "9200");
        }
        let result = Harness::try_parse_from(["server", "--config", &path]);
        unsafe {
            std::env::remove_var(ENV_PORT);
        }

        let config = result.unwrap().server.config().unwrap();
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    #[serial]
    fn invalid_port_is_rejected() {
        let (_file, path) = config_file("{}");
        let err = parse(&["--config", &path, "-P", "not-a-port"])
            .config()
            .unwrap_err();
        assert!(err.to_string().contains("invalid port 'not-a-port'"));
    }

    #[test]
    #[serial]
    fn invalid_locking_mode_is_rejected() {
        let result = Harness::try_parse_from(["server", "--locking", "global"]);
        assert!(result.is_err());
    }
}

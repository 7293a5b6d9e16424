use crate::command::RmgrCommand;
use crate::term::print_info;
use actix_web::rt::System;
use anyhow::Result;
use clap::Args;
use rmgr_config::definitions::{ENV_API_KEY, REMOTE_SERVER_URL};
use rmgr_http::HttpClient;
use tracing::debug;

#[derive(Args)]
#[command(about = "Ask a running rmgr server to update a repository checkout")]
pub struct PullCommand {
    #[arg(
        short = 's',
        long = "server",
        default_value = REMOTE_SERVER_URL,
        help = "The base url of the rmgr server"
    )]
    server: String,

    #[arg(
        short = 'p',
        long = "path",
        required = true,
        help = "The repository path on the server"
    )]
    path: String,

    #[arg(short = 'b', long = "branch", help = "The branch to reset to, main if omitted")]
    branch: Option<String>,

    #[arg(
        long = "api-key",
        env = ENV_API_KEY,
        hide_env_values = true,
        help = "The shared secret sent in the X-API-Key header"
    )]
    api_key: Option<String>,
}

impl PullCommand {
    async fn request(self) -> Result<()> {
        debug!(
            "running pull subcommand with --server: {}, --path: {} and --branch: {:?}",
            self.server, self.path, self.branch
        );

        let client = HttpClient::new(&self.server, self.api_key);
        let response = client.pull_repo(&self.path, self.branch.as_deref()).await?;
        let branch = response.branch.unwrap_or_default();
        print_info(&format!("{} on branch {branch}", response.message))
    }
}

impl RmgrCommand for PullCommand {
    fn exec(self) -> Result<()> {
        System::new().block_on(self.request())
    }
}

use crate::command::RmgrCommand;
use crate::pull::PullCommand;
use crate::server::ServerCommand;
use anyhow::Result;
use clap::{Parser, Subcommand};
use rmgr_config::definitions::VERSION;
use tracing_subscriber::filter::LevelFilter;

#[derive(Subcommand)]
enum Commands {
    Server(ServerCommand),
    Pull(PullCommand),
}

#[derive(Parser)]
#[command(
    name = "rmgr",
    version = VERSION,
    about = "Keeps local repository checkouts in sync with their remote branches"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Sets the level of verbosity"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn tracing_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }

    pub fn tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.tracing_level())
            .init()
    }
}

impl RmgrCommand for Cli {
    fn exec(self) -> Result<()> {
        match self.command {
            Commands::Server(server) => server.exec(),
            Commands::Pull(pull) => pull.exec(),
        }
    }
}

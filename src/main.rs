use clap::Parser;
use rmgr_commands::Cli;
use rmgr_commands::command::RmgrCommand;
use rmgr_commands::env::{EnvFile, load_env_file};
use rmgr_commands::term::print_error;

fn main() {
    // Loaded before parsing so clap can pick the values up from the environment.
    let env_file = match std::env::current_dir() {
        Ok(dir) => load_env_file(&dir),
        Err(e) => EnvFile::Invalid(e.to_string()),
    };

    let cli = Cli::parse();
    cli.tracing();
    env_file.log();

    if let Err(e) = cli.exec() {
        let message = e.to_string();
        if !message.is_empty() {
            if let Err(e) = print_error(&message) {
                eprintln!("{e}");
            }
        }
        std::process::exit(1);
    }
}

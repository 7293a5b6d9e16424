pub mod cli;
pub mod command;
pub mod env;
mod pull;
mod server;
pub mod term;

pub use cli::*;

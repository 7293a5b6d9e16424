pub mod endpoints;
pub mod extractors;
pub mod responses;
mod server;

pub use server::*;

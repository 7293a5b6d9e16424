pub mod branch;
mod error;
pub mod git;
mod locks;
mod updater;

pub use error::*;
pub use locks::*;
pub use updater::*;

mod pull_repo;

pub use pull_repo::*;

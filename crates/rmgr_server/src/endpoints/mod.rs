pub mod pull_repo;

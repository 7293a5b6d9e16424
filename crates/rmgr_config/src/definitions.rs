pub const VERSION: &str = "0.1.0";
pub const TOOL_DIR: &str = ".rmgr";
pub const TOOL_DEFAULT_CONFIG_FILE: &str = "config.yaml";

pub const ENV_API_KEY: &str = "REPO_MANAGEMENT_API_KEY";
pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_CONFIG: &str = "RMGR_CONFIG";

pub const LOCAL_SERVER_HOST: &str = "0.0.0.0";
pub const LOCAL_SERVER_PORT: u16 = 8080;
pub const REMOTE_SERVER_URL: &str = "http://127.0.0.1:8080";

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const PULL_REPO_ROUTE: &str = "/pull-repo";

pub const DEFAULT_GIT_EXECUTABLE: &str = "git";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

pub const ENV_FILE: &str = ".env";


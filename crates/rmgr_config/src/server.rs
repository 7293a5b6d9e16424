use crate::definitions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmgrServerConfig {
    #[serde(default = "RmgrServerConfig::default_host")]
    pub host: String,

    #[serde(default = "RmgrServerConfig::default_port")]
    pub port: u16,
}

impl RmgrServerConfig {
    fn default_host() -> String {
        definitions::LOCAL_SERVER_HOST.to_owned()
    }

    fn default_port() -> u16 {
        definitions::LOCAL_SERVER_PORT
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RmgrServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

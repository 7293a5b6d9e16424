use std::error::Error;
use std::fmt::{Display, Formatter};

use anyhow::{Result, anyhow};
use awc::http::StatusCode;
use awc::{Client, ClientRequest, SendClientRequest};
use rmgr_config::definitions::{API_KEY_HEADER, PULL_REPO_ROUTE};
use rmgr_models::dtos::{PullRepoRequest, PullRepoResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug)]
pub struct RequestError {
    pub text: String,
    pub status: StatusCode,
}

impl RequestError {
    pub fn new(text: &str, status: StatusCode) -> Self {
        Self {
            text: text.to_owned(),
            status,
        }
    }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "response {}: {}", self.status, self.text)
    }
}

impl Error for RequestError {}

pub struct Request {
    request: ClientRequest,
}

impl Request {
    pub fn post(url: &str) -> Self {
        Self {
            request: Client::new().post(url).insert_header(("User-Agent", "rmgr")),
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.request = self.request.insert_header((key, value));
        self
    }

    pub fn api_key(self, api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) => self.header(API_KEY_HEADER, key),
            None => self,
        }
    }

    pub async fn json_with_data<T, V>(self, data: &T) -> Result<V>
    where
        T: Serialize,
        V: DeserializeOwned,
    {
        let send_request = self.request.send_json(data);
        Self::request_with_json::<V>(send_request).await
    }

    async fn request_with_json<T: DeserializeOwned>(send_request: SendClientRequest) -> Result<T> {
        let mut response = send_request.await.map_err(|e| anyhow!(e.to_string()))?;
        let status = response.status();
        debug!("response from server status: {status}");

        let body = response.body().await.map_err(|e| anyhow!(e))?;
        if status == StatusCode::OK {
            return serde_json::from_slice::<T>(&body).map_err(|e| anyhow!(e));
        }

        // Error bodies carry the same envelope as successes.
        let text = match serde_json::from_slice::<PullRepoResponse>(&body) {
            Ok(envelope) => envelope.message,
            Err(_) => String::from_utf8_lossy(&body).to_string(),
        };
        Err(RequestError::new(&text, status).into())
    }
}

/// Client for a running rmgr server.
pub struct HttpClient {
    base_url: String,
    api_key: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    pub fn pull_repo_url(&self) -> String {
        format!("{}{PULL_REPO_ROUTE}", self.base_url)
    }

    pub async fn pull_repo(&self, path: &str, branch: Option<&str>) -> Result<PullRepoResponse> {
        let url = self.pull_repo_url();
        let request = PullRepoRequest::new(path, branch);
        debug!("sending pull request for {path} to {url}");
        Request::post(&url)
            .api_key(self.api_key.as_deref())
            .json_with_data(&request)
            .await
    }
}

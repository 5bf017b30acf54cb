//! HTTP client for the two GitHub endpoints the app talks to.
//!
//! The base URL and token are injected at construction so the client carries
//! its whole configuration — call sites never read the environment. The
//! injectable base URL is also what lets the integration tests point the
//! client at a wiremock server.

use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use super::types::{LanguageMap, Repository, SearchResponse};

/// Errors that can occur when talking to the GitHub API.
#[derive(Debug)]
pub enum ApiError {
    /// Client misconfigured (malformed token value). Caught at startup.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// GitHub returned a non-2xx response.
    Api { status: u16, message: String },
    /// Response body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// GitHub REST API client.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Builds a client with GitHub's required headers baked in.
    ///
    /// `token: None` degrades to unauthenticated (rate-limited) requests.
    pub fn new(
        base_url: String,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("reposcout"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::Config(format!("invalid token value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Searches repositories matching `query`, returning up to `per_page`
    /// items in the order GitHub ranked them.
    pub async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<Repository>, ApiError> {
        let url = format!(
            "{}/search/repositories?q={}&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            per_page
        );
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("search response status: {status}");
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GitHub search API error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!("search returned {} items", search.items.len());
        Ok(search.items)
    }

    /// Fetches the language breakdown for a single repository.
    pub async fn repo_languages(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<LanguageMap, ApiError> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, owner, name);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

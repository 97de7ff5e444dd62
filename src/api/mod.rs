//! Client for the public server directory API
//!
//! [`CfxClient`] wraps a single `reqwest::Client` configured with browser-like
//! default headers and an explicit request timeout. It exposes the directory
//! listing, the per-server detail fetch used by the player scan, and the
//! richer single-server resolve. Response bodies are normalized by
//! [`directory`] and [`detail`].

pub mod detail;
pub mod directory;
pub mod error;
pub mod headers;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::locator::ServerSource;
use crate::models::{DirectoryEntry, ServerDetails, ServerProfile};

pub use error::ApiError;

/// HTTP client for the directory and detail endpoints
#[derive(Debug, Clone)]
pub struct CfxClient {
    /// HTTP client with default headers and timeout
    client: Client,

    /// Directory endpoint
    directory_url: Url,

    /// Detail endpoint base; the server id is pushed as a path segment
    detail_base_url: Url,
}

impl CfxClient {
    /// Create a new client from API configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for unparseable URLs or header values, and
    /// `Error::Http` if the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let directory_url = Url::parse(&config.directory_url)
            .map_err(|e| Error::config(format!("Invalid directory_url: {e}")))?;

        let detail_base_url = Url::parse(&config.detail_base_url)
            .map_err(|e| Error::config(format!("Invalid detail_base_url: {e}")))?;

        if detail_base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "detail_base_url cannot be used as a base: {detail_base_url}"
            )));
        }

        let default_headers = headers::build_browser_headers(&config.user_agent, &config.referer)
            .map_err(|e| Error::config(format!("Invalid header value: {e}")))?;

        let client = Client::builder()
            .default_headers(default_headers)
            .timeout(config.request_timeout())
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            directory_url,
            detail_base_url,
        })
    }

    /// Build the detail URL for a server id
    pub fn detail_url(&self, server_id: &str) -> Url {
        let mut url = self.detail_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(server_id);
        }
        url
    }

    /// Fetch every active server from the directory, in listing order
    ///
    /// # Errors
    ///
    /// Returns `ApiError::DirectoryUnavailable` on a non-success status or a
    /// transport failure, `ApiError::MalformedResponse` if the body has no
    /// `servers` array
    pub async fn fetch_all_servers(&self) -> std::result::Result<Vec<DirectoryEntry>, ApiError> {
        tracing::debug!(url = %self.directory_url, "Fetching server directory");

        let response = self
            .get(self.directory_url.clone())
            .await
            .map_err(|e| ApiError::directory_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::directory_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::directory_transport(&e))?;

        let entries = directory::parse_directory(&body)?;
        tracing::info!(servers = entries.len(), "Fetched server directory");

        Ok(entries)
    }

    /// Fetch normalized details for one server
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ServerUnavailable` on a non-success status, timeout
    /// or transport failure, `ApiError::MalformedResponse` when the endpoint
    /// list, hostname or roster is missing or the endpoint list is empty
    pub async fn fetch_details(
        &self,
        server_id: &str,
    ) -> std::result::Result<ServerDetails, ApiError> {
        let body = self.fetch_detail_body(server_id).await?;
        detail::parse_details(server_id, &body)
    }

    /// Fetch details plus resources and slot count for one server
    ///
    /// # Errors
    ///
    /// Same as [`CfxClient::fetch_details`]
    pub async fn resolve(&self, server_id: &str) -> std::result::Result<ServerProfile, ApiError> {
        let body = self.fetch_detail_body(server_id).await?;
        let profile = detail::parse_profile(server_id, &body)?;

        tracing::info!(
            server_id,
            hostname = %profile.details.hostname,
            players = profile.details.players.len(),
            "Resolved server"
        );

        Ok(profile)
    }

    async fn fetch_detail_body(&self, server_id: &str) -> std::result::Result<String, ApiError> {
        let url = self.detail_url(server_id);
        tracing::debug!(server_id, url = %url, "Fetching server details");

        let response = self
            .get(url)
            .await
            .map_err(|e| ApiError::server_transport(server_id, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::server_status(server_id, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::server_transport(server_id, &e))
    }

    async fn get(&self, url: Url) -> std::result::Result<Response, reqwest::Error> {
        self.client.get(url).send().await
    }
}

#[async_trait]
impl ServerSource for CfxClient {
    async fn list_servers(&self) -> std::result::Result<Vec<DirectoryEntry>, ApiError> {
        self.fetch_all_servers().await
    }

    async fn server_details(&self, server_id: &str) -> std::result::Result<ServerDetails, ApiError> {
        self.fetch_details(server_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CfxClient::new(&ApiConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_directory_url() {
        let config = ApiConfig {
            directory_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(CfxClient::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_user_agent() {
        let config = ApiConfig {
            user_agent: "line\nbreak".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(CfxClient::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_detail_url_with_trailing_slash() {
        let client = CfxClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            client.detail_url("abc123").as_str(),
            "https://servers-frontend.fivem.net/api/servers/single/abc123"
        );
    }

    #[test]
    fn test_detail_url_without_trailing_slash() {
        let config = ApiConfig {
            detail_base_url: "http://localhost:8080/single".to_string(),
            ..ApiConfig::default()
        };
        let client = CfxClient::new(&config).unwrap();
        assert_eq!(
            client.detail_url("abc").as_str(),
            "http://localhost:8080/single/abc"
        );
    }

    #[test]
    fn test_detail_url_escapes_id() {
        let client = CfxClient::new(&ApiConfig::default()).unwrap();
        let url = client.detail_url("a/b");
        assert!(url.as_str().ends_with("/single/a%2Fb"));
    }
}

//! Configuration structures and defaults for the station client.
//!
//! This module provides the [`StationConfig`] consumed by the
//! [`DownloadStationBuilder`](super::DownloadStationBuilder). Defaults match a
//! stock DSM install: plain HTTP on port `5000` under the `webapi` prefix.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;

use reqwest::Url;

/// Default DSM web API port.
pub const DEFAULT_PORT: &str = "5000";
/// Default API path prefix.
pub const DEFAULT_PATH_PREFIX: &str = "webapi";
/// Session scope used for every login.
pub const SESSION_SCOPE: &str = "DownloadStation";
/// Auth API version used for login.
pub const LOGIN_VERSION: u32 = 2;

/// Configuration structure for the station client.
#[derive(Clone)]
pub struct StationConfig {
    /// `http` or `https`.
    pub scheme: String,
    /// Host name or IP address of the NAS.
    pub host: String,
    pub port: String,
    /// API path prefix, only changed when a separate endpoint is configured.
    pub path_prefix: String,
    /// Local DSM account name.
    pub username: String,
    /// Local DSM account password.
    pub password: String,
    /// HTTP client settings.
    pub http: HttpClientConfig,
}

impl StationConfig {
    /// Root URL every CGI path is resolved against, always ending with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the parts do not form a valid URL.
    pub fn base_url(&self) -> Result<Url> {
        let prefix = self.path_prefix.trim_matches('/');
        let raw = if prefix.is_empty() {
            format!("{}://{}:{}/", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}/{}/", self.scheme, self.host, self.port, prefix)
        };

        let url = Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(raw));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for StationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationConfig")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path_prefix", &self.path_prefix)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("http", &self.http)
            .finish()
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: DEFAULT_PORT.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            username: String::new(),
            password: String::new(),
            http: HttpClientConfig::default(),
        }
    }
}

//! Builder pattern implementation for creating [`DownloadStation`] clients.
//!
//! # Examples
//!
//! ```rust,no_run
//! use download_station::DownloadStationBuilder;
//!
//! # async fn example() -> Result<(), download_station::Error> {
//! let station = DownloadStationBuilder::new()
//!     .host("192.168.1.20")
//!     .username("admin")
//!     .password("secret")
//!     .connect()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use super::{client::DownloadStation, config::StationConfig};
use crate::error::Result;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;

/// A builder used to create a [`DownloadStation`].
#[derive(Debug, Default)]
pub struct DownloadStationBuilder {
    config: StationConfig,
}

impl DownloadStationBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloadStationBuilder::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: StationConfig) -> Self {
        Self { config }
    }

    /// Sets the host name or IP address of the NAS.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the API port.
    pub fn port(mut self, port: impl ToString) -> Self {
        self.config.port = port.to_string();
        self
    }

    /// Sets the API path prefix.
    pub fn path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.config.path_prefix = path_prefix.into();
        self
    }

    /// Talk to the station over HTTPS.
    pub fn https(mut self, https: bool) -> Self {
        self.config.scheme = if https { "https" } else { "http" }.to_string();
        self
    }

    /// Sets the account name.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    /// Sets the account password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Route every request through `proxy`.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Add default http headers; repeated calls are merged.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .http
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Add a default http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .http
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Configuration assembled so far.
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Logs in and returns an authenticated [`DownloadStation`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Authentication`](crate::Error::Authentication) when
    /// the station rejects the credentials, or with a transport error when it
    /// cannot be reached.
    pub async fn connect(self) -> Result<DownloadStation> {
        DownloadStation::connect(self.config).await
    }
}

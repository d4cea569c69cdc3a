//! HTTP module containing HTTP client functionality.
//!
//! This module builds the middleware-wrapped reqwest client every
//! [`DownloadStation`](crate::DownloadStation) talks through. Requests are
//! traced with `reqwest-tracing`; nothing is retried, a failed call is
//! reported to the caller as is.
//!
//! # Examples
//!
//! ```rust
//! use download_station::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};

//! Async client for the Synology Download Station web API.
//!
//! The crate logs in once, keeps the session id, and turns method calls into
//! GET requests against the station's versioned CGI endpoints.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use download_station::{DownloadStation, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let station = DownloadStation::builder()
//!     .host("192.168.1.20")
//!     .username("admin")
//!     .password("secret")
//!     .connect()
//!     .await?;
//!
//! if let Some(list) = station.list_tasks().await? {
//!     for task in &list.tasks {
//!         println!("{} {} {}", task.id, task.status, task.title);
//!     }
//! }
//!
//! station.logout().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`station`] - The [`DownloadStation`] client, its builder and every operation
//! - [`api`] - Request building, dispatch and response envelopes
//! - [`endpoint`] - Static registry of the remote APIs
//! - [`model`] - Typed payloads (tasks, search results, info)
//! - [`http`] - HTTP client construction
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod api;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod model;
pub mod station;

pub use api::{ApiEnvelope, ApiRequest, Dispatcher, RawResponse};
pub use endpoint::{lookup, EndpointDescriptor};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use model::{SearchResult, SearchStart, SessionId, TaskList, TaskRecord, TaskStatus};
pub use station::{DownloadStation, DownloadStationBuilder, PollOptions, StationConfig};

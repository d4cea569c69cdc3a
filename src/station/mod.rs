//! Station module containing the authenticated client and its operations.
//!
//! - `client` - [`DownloadStation`], login/logout and raw dispatch
//! - `builder` - [`DownloadStationBuilder`]
//! - `config` - [`StationConfig`] and its defaults
//! - `poll` - [`PollOptions`] bounding the polling workflows
//! - `tasks`, `search`, `correction`, `info` - the operations, as `impl` blocks
//!   on [`DownloadStation`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use download_station::{DownloadStation, PollOptions};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), download_station::Error> {
//! let station = DownloadStation::builder()
//!     .host("192.168.1.20")
//!     .username("admin")
//!     .password("secret")
//!     .connect()
//!     .await?;
//!
//! let options = PollOptions::new().deadline(Duration::from_secs(120));
//! let results = station
//!     .search_until_finished("big buck bunny", "720p", &options)
//!     .await?;
//!
//! if let Some(uri) = results.best().and_then(|item| item["download_uri"].as_str()) {
//!     station.create_task(uri, "").await?;
//! }
//! station.logout().await;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod poll;

mod correction;
mod info;
mod search;
mod tasks;

pub use builder::DownloadStationBuilder;
pub use client::{authenticate, DownloadStation};
pub use config::StationConfig;
pub use poll::PollOptions;
pub use search::{DEFAULT_QUALITY, DEFAULT_SEARCH_WAIT};

//! Endpoint module containing the static registry of Download Station APIs.
//!
//! Every request the client issues names a logical endpoint (`DS_Task`,
//! `API_Auth`, ...). The registry resolves that name to the remote API name and
//! the CGI path it is served from. The values are the ones documented by
//! Synology and must match them exactly.
//!
//! # Examples
//!
//! ```rust
//! use download_station::endpoint::lookup;
//!
//! let task = lookup("DS_Task")?;
//! assert_eq!(task.api, "SYNO.DownloadStation.Task");
//! assert_eq!(task.path, "DownloadStation/task.cgi");
//! # Ok::<(), download_station::Error>(())
//! ```

pub mod registry;

pub use registry::{
    lookup, EndpointDescriptor, API_AUTH, API_INFO, DS_BT_SEARCH, DS_INFO, DS_TASK, ENDPOINTS,
};

//! Lookup table of the remote APIs the client knows how to address.

use crate::error::{Error, Result};

/// Logical name of the API information endpoint.
pub const API_INFO: &str = "API_Info";
/// Logical name of the authentication endpoint.
pub const API_AUTH: &str = "API_Auth";
/// Logical name of the Download Station information endpoint.
pub const DS_INFO: &str = "DS_Info";
/// Logical name of the BT search endpoint.
pub const DS_BT_SEARCH: &str = "DS_BT_Search";
/// Logical name of the task endpoint.
pub const DS_TASK: &str = "DS_Task";

/// Static description of one remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Logical name used by the client.
    pub name: &'static str,
    /// Remote API name sent as the `api` query parameter.
    pub api: &'static str,
    /// CGI path relative to the API prefix.
    pub path: &'static str,
    /// Lowest supported API version.
    pub min_version: u32,
    /// Highest supported API version.
    pub max_version: u32,
}

impl EndpointDescriptor {
    /// Whether `version` lies within the supported range.
    pub fn supports(&self, version: u32) -> bool {
        (self.min_version..=self.max_version).contains(&version)
    }

    /// Rejects a version outside the supported range.
    pub(crate) fn check_version(&self, version: u32) -> Result<()> {
        if self.supports(version) {
            Ok(())
        } else {
            Err(Error::UnsupportedVersion {
                endpoint: self.name,
                version,
                min: self.min_version,
                max: self.max_version,
            })
        }
    }
}

/// Every endpoint known to the client.
pub const ENDPOINTS: [EndpointDescriptor; 5] = [
    EndpointDescriptor {
        name: API_INFO,
        api: "SYNO.API.Info",
        path: "query.cgi",
        min_version: 1,
        max_version: 1,
    },
    EndpointDescriptor {
        name: API_AUTH,
        api: "SYNO.API.Auth",
        path: "auth.cgi",
        min_version: 1,
        max_version: 7,
    },
    EndpointDescriptor {
        name: DS_INFO,
        api: "SYNO.DownloadStation.Info",
        path: "DownloadStation/info.cgi",
        min_version: 1,
        max_version: 2,
    },
    EndpointDescriptor {
        name: DS_BT_SEARCH,
        api: "SYNO.DownloadStation.BTSearch",
        path: "DownloadStation/btsearch.cgi",
        min_version: 1,
        max_version: 1,
    },
    EndpointDescriptor {
        name: DS_TASK,
        api: "SYNO.DownloadStation.Task",
        path: "DownloadStation/task.cgi",
        min_version: 1,
        max_version: 3,
    },
];

/// Resolves a logical endpoint name.
///
/// # Errors
///
/// Returns [`Error::UnknownEndpoint`] when `name` is not registered.
pub fn lookup(name: &str) -> Result<&'static EndpointDescriptor> {
    ENDPOINTS
        .iter()
        .find(|endpoint| endpoint.name == name)
        .ok_or_else(|| Error::UnknownEndpoint(name.to_string()))
}

//! Payloads of the informational endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Location and version range of one API, as advertised by `SYNO.API.Info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfoEntry {
    pub path: String,
    pub min_version: u32,
    pub max_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_format: Option<String>,
}

/// Map of remote API name to its [`ApiInfoEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiInfo(pub HashMap<String, ApiInfoEntry>);

impl ApiInfo {
    pub fn get(&self, api: &str) -> Option<&ApiInfoEntry> {
        self.0.get(api)
    }
}

/// Answer of `SYNO.DownloadStation.Info` `getinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub version_string: String,
}

//! BT search payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer of the search `start` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStart {
    /// Id of the remote search, used to poll its results.
    #[serde(rename = "taskid")]
    pub task_id: String,
}

/// Answer of the search `list` method.
///
/// `items` are kept in the order the station returned them, which is by seed
/// count, descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Whether every search module has reported back.
    pub finished: bool,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub items: Vec<Value>,
}

impl SearchResult {
    /// Best ranked match, if any.
    pub fn best(&self) -> Option<&Value> {
        self.items.first()
    }
}

//! Download task payloads.
//!
//! # Examples
//!
//! ```rust
//! use download_station::model::{TaskList, TaskStatus};
//!
//! let list: TaskList = serde_json::from_str(
//!     r#"{"total":1,"offset":0,"tasks":[{"id":"dbid_1","status":"seeding","title":"ubuntu.iso"}]}"#,
//! )?;
//! assert_eq!(list.tasks[0].status, TaskStatus::Seeding);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Status reported for a download task.
///
/// Statuses this crate does not know about are kept verbatim in
/// [`TaskStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Waiting,
    Downloading,
    Paused,
    Finishing,
    Finished,
    HashChecking,
    Seeding,
    FilehostingWaiting,
    Extracting,
    Error,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Waiting => "waiting",
            TaskStatus::Downloading => "downloading",
            TaskStatus::Paused => "paused",
            TaskStatus::Finishing => "finishing",
            TaskStatus::Finished => "finished",
            TaskStatus::HashChecking => "hash_checking",
            TaskStatus::Seeding => "seeding",
            TaskStatus::FilehostingWaiting => "filehosting_waiting",
            TaskStatus::Extracting => "extracting",
            TaskStatus::Error => "error",
            TaskStatus::Other(status) => status,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "waiting" => TaskStatus::Waiting,
            "downloading" => TaskStatus::Downloading,
            "paused" => TaskStatus::Paused,
            "finishing" => TaskStatus::Finishing,
            "finished" => TaskStatus::Finished,
            "hash_checking" => TaskStatus::HashChecking,
            "seeding" => TaskStatus::Seeding,
            "filehosting_waiting" => TaskStatus::FilehostingWaiting,
            "extracting" => TaskStatus::Extracting,
            "error" => TaskStatus::Error,
            _ => TaskStatus::Other(status),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One download task as reported by the station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Opaque task id, e.g. `dbid_42`.
    pub id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub title: String,
    /// Task kind (`bt`, `http`, `ftp`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub username: String,
    /// Total size in bytes.
    #[serde(default)]
    pub size: u64,
    /// `detail`/`file`/`transfer` blocks requested through `additional`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional: Option<Value>,
    /// Any other field the station sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of the `list` and `getinfo` task methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    /// Number of tasks on the station (`list` only).
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl TaskList {
    /// Finds a task by id.
    pub fn find(&self, id: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

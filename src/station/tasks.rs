//! Task lifecycle operations.
//!
//! When the station answers `success == false` the failure is logged and
//! reported as `Ok(None)` or `Ok(false)`. Errors are reserved for transport
//! and decoding problems.

use super::client::DownloadStation;
use crate::api::ApiRequest;
use crate::endpoint::DS_TASK;
use crate::error::Result;
use crate::model::TaskList;

use serde_json::Value;
use tracing::info;

const ADDITIONAL_INFO: &str = "detail,file";
const TASK_QUERY_FAILED: &str = "Problem retrieving download info";

impl DownloadStation {
    /// Lists every task with its detail and file information.
    pub async fn list_tasks(&self) -> Result<Option<TaskList>> {
        info!("Getting current download info");
        let request = self
            .request(DS_TASK, "list", 1)
            .param("additional", ADDITIONAL_INFO);

        let envelope = self.dispatch_json::<TaskList>(&request).await?;
        if !envelope.success {
            envelope.log_failure(TASK_QUERY_FAILED);
            return Ok(None);
        }
        info!("Download info retrieved");
        envelope.into_data("task list").map(Some)
    }

    /// Fetches one task with its detail and file information.
    pub async fn get_task(&self, task_id: &str) -> Result<Option<TaskList>> {
        info!(task_id, "Getting individual info");
        let request = self
            .request(DS_TASK, "getinfo", 1)
            .param("additional", ADDITIONAL_INFO)
            .param("id", task_id);

        let envelope = self.dispatch_json::<TaskList>(&request).await?;
        if !envelope.success {
            envelope.log_failure(TASK_QUERY_FAILED);
            return Ok(None);
        }
        info!(task_id, "Download info retrieved");
        envelope.into_data("task info").map(Some)
    }

    /// Adds a download task for `uri` (magnet, http, ftp, ...).
    ///
    /// An empty `destination` uses the station's default share.
    pub async fn create_task(&self, uri: &str, destination: &str) -> Result<bool> {
        info!("Adding download task");
        let request = self
            .request(DS_TASK, "create", 2)
            .param("uri", uri)
            .param("destination", destination);

        self.task_action(
            &request,
            "Download task successfully added",
            "Problem adding download task",
        )
        .await
    }

    /// Resumes a paused or finished task.
    pub async fn resume_task(&self, task_id: &str) -> Result<bool> {
        let request = self.request(DS_TASK, "resume", 1).param("id", task_id);
        self.task_action(&request, "Download resumed", "Problem resuming download task")
            .await
    }

    /// Pauses a task.
    pub async fn pause_task(&self, task_id: &str) -> Result<bool> {
        let request = self.request(DS_TASK, "pause", 1).param("id", task_id);
        self.task_action(&request, "Download paused", "Problem pausing download task")
            .await
    }

    /// Removes a task.
    pub async fn delete_task(&self, task_id: &str) -> Result<bool> {
        info!(task_id, "Removing download task");
        let request = self.request(DS_TASK, "delete", 1).param("id", task_id);
        self.task_action(&request, "Download removed", "Problem removing download")
            .await
    }

    async fn task_action(
        &self,
        request: &ApiRequest,
        done: &str,
        failed: &str,
    ) -> Result<bool> {
        let envelope = self.dispatch_json::<Value>(request).await?;
        if envelope.success {
            info!(method = request.method(), "{done}");
            Ok(true)
        } else {
            envelope.log_failure(failed);
            Ok(false)
        }
    }
}

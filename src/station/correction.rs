//! Recovery of tasks stuck in the `finished` state.
//!
//! A task the station reports as `finished` sometimes only shows its real
//! state after being resumed. Resuming a finished torrent normally moves it
//! to `seeding`; if it moves to `downloading` instead, the payload is gone
//! from disk and the task is removed.

use super::client::DownloadStation;
use super::poll::{PollOptions, Poller};
use crate::error::{Error, Result};
use crate::model::TaskStatus;

use tracing::{info, warn};

impl DownloadStation {
    /// Resumes `task_id` until its status leaves `finished`.
    ///
    /// Each round resumes the task, waits `options.interval`, then reads the
    /// status again. The loop compares against `finished` itself, not against
    /// the previously observed status. Always returns `true` once the loop
    /// ends.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] when the task cannot be read back,
    /// [`Error::Timeout`] or [`Error::Cancelled`] when the bounds in `options`
    /// are hit.
    pub async fn correct_finished_download(
        &self,
        task_id: &str,
        options: &PollOptions,
    ) -> Result<bool> {
        if options.is_unbounded() {
            warn!(task_id, "Correcting download without deadline or cancellation");
        }
        let poller = Poller::start("correct finished download", options);

        let mut status = TaskStatus::Finished;
        while status == TaskStatus::Finished {
            poller.bounded(self.resume_task(task_id)).await?;
            poller.sleep(options.interval).await?;
            status = poller.bounded(self.task_status(task_id)).await?;
            info!(task_id, %status, "Observed task status");

            match status {
                TaskStatus::Seeding => info!(task_id, "Successfully resumed"),
                TaskStatus::Downloading => {
                    warn!(task_id, "Incorrectly resumed");
                    poller.bounded(self.delete_task(task_id)).await?;
                }
                _ => {}
            }
        }
        Ok(true)
    }

    /// Current status of one task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] when the station reports a
    /// failure or returns no task.
    pub async fn task_status(&self, task_id: &str) -> Result<TaskStatus> {
        let list = self.get_task(task_id).await?.ok_or_else(|| {
            Error::MalformedResponse(format!("no task info returned for {task_id}"))
        })?;

        list.tasks
            .into_iter()
            .next()
            .map(|task| task.status)
            .ok_or_else(|| Error::MalformedResponse(format!("task list for {task_id} is empty")))
    }
}

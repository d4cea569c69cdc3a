//! BT search workflow.
//!
//! A search runs asynchronously on the station: `start` hands back a task id,
//! and `list` reports the matches gathered so far together with a `finished`
//! flag. Two ways of waiting are offered:
//!
//! - [`DownloadStation::search`] waits once, checks once, and returns whatever
//!   the station has by then.
//! - [`DownloadStation::search_until_finished`] polls until the station
//!   reports the search finished, within the bounds of a [`PollOptions`].

use super::client::DownloadStation;
use super::poll::{PollOptions, Poller};
use crate::endpoint::DS_BT_SEARCH;
use crate::error::{Error, Result};
use crate::model::{SearchResult, SearchStart};

use std::time::Duration;
use tracing::{debug, info, warn};

/// Title filter applied when none is given.
pub const DEFAULT_QUALITY: &str = "720p";
/// Wait of [`DownloadStation::search`] when none is given.
pub const DEFAULT_SEARCH_WAIT: Duration = Duration::from_secs(30);

impl DownloadStation {
    /// Starts a search on every enabled search module.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchStart`] when the station answers with a non-2xx
    /// status, reports a failure, or omits the task id.
    pub async fn start_search(&self, keyword: &str) -> Result<SearchStart> {
        info!(keyword, "Searching");
        let request = self
            .request(DS_BT_SEARCH, "start", 1)
            .param("keyword", keyword)
            .param("module", "enabled");

        let response = self.dispatch(&request).await?;
        if !response.is_success() {
            return Err(Error::SearchStart(format!(
                "station answered {}",
                response.status
            )));
        }

        let envelope = response.json::<SearchStart>().map_err(|e| match e {
            Error::MalformedResponse(msg) => Error::SearchStart(msg),
            other => other,
        })?;
        if !envelope.success {
            envelope.log_failure("Problem with search");
            return Err(Error::SearchStart(format!(
                "station reported failure: {}",
                envelope.raw()
            )));
        }

        let started = envelope
            .data
            .ok_or_else(|| Error::SearchStart("response has no task id".to_string()))?;
        debug!(task_id = %started.task_id, "Search started");
        Ok(started)
    }

    /// Fetches the current results of a search, best seeded first, keeping
    /// only titles matching `quality`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] when the station reports a failure
    /// or the payload has no `finished` flag.
    pub async fn search_status(&self, task_id: &str, quality: &str) -> Result<SearchResult> {
        let request = self
            .request(DS_BT_SEARCH, "list", 1)
            .param("sort_by", "seeds")
            .param("sort_direction", "desc")
            .param("filter_title", quality)
            .param("taskid", task_id);

        let envelope = self.dispatch_json::<SearchResult>(&request).await?;
        if !envelope.success {
            envelope.log_failure("Problem listing search results");
            return Err(Error::MalformedResponse(format!(
                "search list reported failure: {}",
                envelope.raw()
            )));
        }

        let result = envelope.into_data("search list")?;
        debug!(
            task_id,
            finished = result.finished,
            total = result.total,
            "Search status"
        );
        Ok(result)
    }

    /// Starts a search, waits `wait` once, and returns the results found by
    /// then, finished or not.
    pub async fn search(
        &self,
        keyword: &str,
        wait: Duration,
        quality: &str,
    ) -> Result<SearchResult> {
        let started = self.start_search(keyword).await?;

        info!(keyword, wait_secs = wait.as_secs(), "Starting timed search");
        tokio::time::sleep(wait).await;

        let result = self.search_status(&started.task_id, quality).await?;
        info!(keyword, finished = result.finished, "Finished search");
        Ok(result)
    }

    /// Starts a search and polls it until the station reports it finished.
    ///
    /// After `options.initial_delay`, the results are checked every
    /// `options.interval`. With no deadline and no cancellation token this
    /// never gives up on a search that does not finish.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] or [`Error::Cancelled`] when the bounds in `options`
    /// are hit, plus the errors of [`DownloadStation::start_search`] and
    /// [`DownloadStation::search_status`].
    pub async fn search_until_finished(
        &self,
        keyword: &str,
        quality: &str,
        options: &PollOptions,
    ) -> Result<SearchResult> {
        if options.is_unbounded() {
            warn!(keyword, "Polling search without deadline or cancellation");
        }
        let poller = Poller::start("search", options);

        let started = poller.bounded(self.start_search(keyword)).await?;
        poller.sleep(options.initial_delay).await?;

        loop {
            let result = poller
                .bounded(self.search_status(&started.task_id, quality))
                .await?;
            if result.finished {
                info!(keyword, total = result.total, "Search complete");
                return Ok(result);
            }

            info!(
                keyword,
                wait_secs = options.interval.as_secs(),
                "Search not complete, waiting"
            );
            poller.sleep(options.interval).await?;
        }
    }
}

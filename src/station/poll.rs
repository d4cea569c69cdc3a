//! Bounds for the polling workflows.
//!
//! Both the search and the correction workflows poll the station at a fixed
//! interval until a remote condition holds. Left alone they never give up, so
//! every poll and every sleep runs under a [`PollOptions`] deadline and
//! cancellation token.
//!
//! # Examples
//!
//! ```rust
//! use download_station::PollOptions;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let options = PollOptions::new()
//!     .interval(Duration::from_secs(10))
//!     .deadline(Duration::from_secs(300))
//!     .cancel_token(token.clone());
//!
//! // Elsewhere: token.cancel();
//! # let _ = options;
//! ```

use crate::error::{Error, Result};

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Default pause between two polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Default pause between starting a search and its first poll.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(2);

/// Interval and bounds of a polling workflow.
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Pause between two polls.
    pub interval: Duration,
    /// Pause before the first poll of a search.
    pub initial_delay: Duration,
    /// Maximum total duration, unbounded when `None`.
    pub deadline: Option<Duration>,
    /// Token that aborts the workflow when cancelled.
    pub cancel: Option<CancellationToken>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            initial_delay: DEFAULT_INITIAL_DELAY,
            deadline: None,
            cancel: None,
        }
    }
}

impl PollOptions {
    /// Creates options with the default interval and no bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pause between two polls.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the pause before the first poll of a search.
    pub fn initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// Give up with [`Error::Timeout`] once `deadline` has elapsed.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Give up with [`Error::Cancelled`] once `token` is cancelled.
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether the workflow can run forever.
    pub fn is_unbounded(&self) -> bool {
        self.deadline.is_none() && self.cancel.is_none()
    }
}

/// Runs futures of one workflow under its deadline and cancellation token.
pub(crate) struct Poller {
    operation: &'static str,
    deadline: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl Poller {
    /// Starts the clock for `operation`.
    pub(crate) fn start(operation: &'static str, options: &PollOptions) -> Self {
        Self {
            operation,
            deadline: options.deadline.map(|d| Instant::now() + d),
            cancel: options.cancel.clone(),
        }
    }

    /// Awaits `fut` unless the workflow is cancelled or out of time first.
    pub(crate) async fn bounded<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Err(Error::Cancelled {
                operation: self.operation.to_string(),
            }),
            _ = expired => Err(Error::Timeout {
                operation: self.operation.to_string(),
            }),
            result = fut => result,
        }
    }

    /// Sleeps for `duration` under the workflow bounds.
    pub(crate) async fn sleep(&self, duration: Duration) -> Result<()> {
        self.bounded(async {
            tokio::time::sleep(duration).await;
            Ok(())
        })
        .await
    }
}

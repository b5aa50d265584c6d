//! Orchestrates identity resolution and the propagation check.

mod config;
mod error;

pub use config::{TrackerConfig, DEFAULT_REQUEST_TIMEOUT};
pub use error::TrackerError;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::checker::{Checker, PropagationReport};
use crate::config::Channel;
use crate::github::{OctocrabHost, RepositoryHost};
use crate::identity::resolve_identity;

/// Resolves a pull request and reports which channels contain it.
pub struct Tracker {
    config: TrackerConfig,
    host: Arc<dyn RepositoryHost>,
}

impl Tracker {
    /// Builds a tracker talking to GitHub through octocrab.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Host`] if the client cannot be built.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        let host = OctocrabHost::build(
            config.token(),
            config.base_uri(),
            config.request_timeout(),
        )?;
        Ok(Self::with_host(config, Arc::new(host)))
    }

    /// Builds a tracker on top of an existing host.
    #[must_use]
    pub fn with_host(config: TrackerConfig, host: Arc<dyn RepositoryHost>) -> Self {
        Self { config, host }
    }

    /// Returns the tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Resolves `number` and checks it against `channels`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Lookup`] when `number` is not a pull request
    /// (including the issue case, see [`TrackerError::issue_mismatch`]),
    /// [`TrackerError::Check`] when the check fails, and
    /// [`TrackerError::Cancelled`] when `cancel` fires during resolution.
    pub async fn track(
        &self,
        number: u64,
        channels: &[Channel],
        cancel: &CancellationToken,
    ) -> Result<PropagationReport, TrackerError> {
        info!(
            number,
            channels = channels.len(),
            authenticated = self.config.token().is_some(),
            "Tracking pull request"
        );

        let info = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TrackerError::Cancelled),
            result = resolve_identity(self.host.as_ref(), number, self.config.timeline_pages()) => result?,
        };

        let checker = Checker::new(Arc::clone(&self.host));
        Ok(checker.check_pull_request(&info, channels, cancel).await?)
    }
}

//! Checking which channels contain a pull request's merge commit.

mod error;
mod report;

pub use error::CheckError;
pub use report::{sort_channel_results, ChannelResult, ChannelStatus, PropagationReport};

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::config::Channel;
use crate::github::RepositoryHost;
use crate::identity::PullRequestInfo;

/// Compares merge commits against channel branches.
#[derive(Clone)]
pub struct Checker {
    host: Arc<dyn RepositoryHost>,
}

impl Checker {
    #[must_use]
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self { host }
    }

    /// Fetches pull request `number` and checks it against `channels`.
    ///
    /// No issue disambiguation happens here; a missing pull request surfaces
    /// as [`CheckError::Host`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] if the pull request cannot be fetched, the check
    /// is cancelled, or the merge commit is missing.
    pub async fn check(
        &self,
        number: u64,
        channels: &[Channel],
        cancel: &CancellationToken,
    ) -> Result<PropagationReport, CheckError> {
        let raw = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(CheckError::Cancelled),
            result = self.host.pull_request(number) => result?,
        };

        self.check_pull_request(&PullRequestInfo::from(raw), channels, cancel)
            .await
    }

    /// Checks an already resolved pull request against `channels`.
    ///
    /// Unmerged pull requests are reported absent everywhere without touching
    /// the host. Otherwise every channel is compared concurrently; a failing
    /// comparison marks only its own channel as unknown.
    ///
    /// # Errors
    ///
    /// - [`CheckError::MergeCommitMissing`] for a merged pull request without
    ///   a merge commit.
    /// - [`CheckError::Cancelled`] when `cancel` fires before all comparisons
    ///   finished. No partial report is returned.
    pub async fn check_pull_request(
        &self,
        info: &PullRequestInfo,
        channels: &[Channel],
        cancel: &CancellationToken,
    ) -> Result<PropagationReport, CheckError> {
        let span = info_span!("check_propagation", pr = info.number, channels = channels.len());

        async {
            if !info.is_merged() {
                debug!(state = %info.state, "Pull request not merged");
                let results = channels
                    .iter()
                    .map(|c| ChannelResult::new(&c.name, &c.branch, ChannelStatus::NotPresent))
                    .collect();
                return Ok(PropagationReport::new(info, results));
            }

            if info.merge_commit.is_empty() {
                return Err(CheckError::MergeCommitMissing {
                    number: info.number,
                });
            }

            info!(commit = %info.merge_commit, "Comparing merge commit against channels");

            // Window equals the channel count, so every comparison runs at once
            // while `buffered` keeps results in input order.
            let fan_out = stream::iter(channels)
                .map(|channel| self.check_channel(&info.merge_commit, channel))
                .buffered(channels.len().max(1))
                .collect::<Vec<_>>();

            let results = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    debug!("Propagation check cancelled");
                    return Err(CheckError::Cancelled);
                }
                results = fan_out => results,
            };

            let report = PropagationReport::new(info, results);
            info!(
                present = report
                    .channels
                    .iter()
                    .filter(|c| c.status == ChannelStatus::Present)
                    .count(),
                "Propagation check finished"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }

    async fn check_channel(&self, commit: &str, channel: &Channel) -> ChannelResult {
        match self
            .host
            .compare_commit_to_branch(commit, &channel.branch)
            .await
        {
            Ok(comparison) => {
                let status = if comparison.behind_by == 0 {
                    ChannelStatus::Present
                } else {
                    ChannelStatus::NotPresent
                };
                debug!(
                    channel = %channel.name,
                    behind_by = comparison.behind_by,
                    status = status.as_str(),
                    "Compared channel"
                );
                ChannelResult::new(&channel.name, &channel.branch, status)
            }
            Err(e) => {
                warn!(channel = %channel.name, error = %e, "Channel comparison failed");
                ChannelResult::unknown(&channel.name, &channel.branch, e.to_string())
            }
        }
    }
}

//! Propagation report types.

use serde::Serialize;

use crate::identity::{PrState, PullRequestInfo};

/// Whether a channel contains a pull request's merge commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelStatus {
    Present,
    NotPresent,

    /// The comparison failed; nothing is known about the channel.
    Unknown,
}

impl ChannelStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::NotPresent => "not_present",
            Self::Unknown => "unknown",
        }
    }
}

/// Outcome of checking one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelResult {
    pub name: String,
    pub branch: String,
    pub status: ChannelStatus,

    /// Failure description, only set for [`ChannelStatus::Unknown`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChannelResult {
    /// Creates a result without an error.
    #[must_use]
    pub fn new(name: impl Into<String>, branch: impl Into<String>, status: ChannelStatus) -> Self {
        Self {
            name: name.into(),
            branch: branch.into(),
            status,
            error: None,
        }
    }

    /// Creates an [`ChannelStatus::Unknown`] result carrying `error`.
    #[must_use]
    pub fn unknown(
        name: impl Into<String>,
        branch: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            branch: branch.into(),
            status: ChannelStatus::Unknown,
            error: Some(error.into()),
        }
    }
}

/// Aggregated propagation state of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropagationReport {
    #[serde(rename = "pr")]
    pub number: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub state: PrState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit: Option<String>,

    /// One entry per requested channel, sorted by [`sort_channel_results`].
    pub channels: Vec<ChannelResult>,
}

impl PropagationReport {
    /// Builds a report for `info`, sorting `channels` in the process.
    #[must_use]
    pub fn new(info: &PullRequestInfo, mut channels: Vec<ChannelResult>) -> Self {
        sort_channel_results(&mut channels);
        Self {
            number: info.number,
            title: non_empty(&info.title),
            author: non_empty(&info.author),
            state: info.state,
            merge_commit: non_empty(&info.merge_commit),
            channels,
        }
    }

    /// Returns the result for a channel by name.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&ChannelResult> {
        self.channels.iter().find(|c| c.name == name)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Orders results: present channels first in input order, then all
/// others alphabetically by name.
pub fn sort_channel_results(results: &mut [ChannelResult]) {
    // `sort_by` is stable, so present entries keep their input order.
    results.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
}

fn sort_key(result: &ChannelResult) -> (bool, &str) {
    let present = result.status == ChannelStatus::Present;
    (!present, if present { "" } else { result.name.as_str() })
}

//! Normalised pull request data.

use std::fmt;

use serde::Serialize;

use crate::github::PullRequestRaw;

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    Draft,
    Open,
    Merged,
    Closed,
}

impl PrState {
    /// Derives the state from the raw flags. Merged wins over draft, which
    /// wins over the raw "open"/"closed" state.
    #[must_use]
    pub fn derive(merged: bool, draft: bool, raw_state: &str) -> Self {
        if merged {
            Self::Merged
        } else if draft {
            Self::Draft
        } else if raw_state == "open" {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Returns the lowercase state name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Merged => "merged",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pull request as the propagation check sees it.
///
/// Empty strings stand in for values GitHub did not report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub state: PrState,

    /// Merge commit SHA, empty when unmerged or not recorded.
    pub merge_commit: String,

    pub base_branch: String,
}

impl PullRequestInfo {
    /// Returns true when the pull request has been merged.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.state == PrState::Merged
    }
}

impl From<PullRequestRaw> for PullRequestInfo {
    fn from(raw: PullRequestRaw) -> Self {
        Self {
            number: raw.number,
            state: PrState::derive(raw.merged, raw.draft, &raw.state),
            title: raw.title.unwrap_or_default(),
            author: raw.user.map(|u| u.login).unwrap_or_default(),
            // Open pull requests carry a test merge SHA that never landed
            merge_commit: raw
                .merge_commit_sha
                .filter(|_| raw.merged)
                .unwrap_or_default(),
            base_branch: raw.base.map(|b| b.ref_field).unwrap_or_default(),
        }
    }
}

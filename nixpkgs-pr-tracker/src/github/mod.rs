//! GitHub access for the NixOS/nixpkgs repository.
//!
//! [`RepositoryHost`] is the seam between the tracker and the remote API. The
//! resolver, finder and checker only talk to the trait. [`OctocrabHost`] is the
//! implementation used in production.

mod client;
mod error;
mod error_mapping;
mod models;
pub mod rate_limit;

pub use client::OctocrabHost;
pub use error::HostError;
pub use models::{
    Comparison, CrossReferenceIssue, CrossReferenceSource, IssueRaw, PullRequestMarker,
    PullRequestRaw, RefRaw, RepositoryRef, TimelineEvent, UserRaw,
};

use async_trait::async_trait;

/// Owner of the tracked repository.
pub const REPOSITORY_OWNER: &str = "NixOS";

/// Name of the tracked repository.
pub const REPOSITORY_NAME: &str = "nixpkgs";

/// Full name of the tracked repository in "owner/name" format.
pub const REPOSITORY_FULL_NAME: &str = "NixOS/nixpkgs";

/// Number of timeline events requested per page.
pub const TIMELINE_PAGE_SIZE: u8 = 100;

/// Web URL of a pull request in the tracked repository.
#[must_use]
pub fn pull_request_url(number: u64) -> String {
    format!("https://github.com/{REPOSITORY_FULL_NAME}/pull/{number}")
}

/// Remote API operations needed to track a pull request.
///
/// Implementations must be safe to share between the concurrent channel
/// comparisons of a single check.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetches a pull request by number.
    async fn pull_request(&self, number: u64) -> Result<PullRequestRaw, HostError>;

    /// Fetches an issue by number. Pull requests are issues too, in which case
    /// the record carries a pull request marker.
    async fn issue(&self, number: u64) -> Result<IssueRaw, HostError>;

    /// Fetches one page (1-based) of an issue's timeline.
    async fn issue_timeline(&self, number: u64, page: u32)
        -> Result<Vec<TimelineEvent>, HostError>;

    /// Compares `commit` (base) against `branch` (head).
    async fn compare_commit_to_branch(
        &self,
        commit: &str,
        branch: &str,
    ) -> Result<Comparison, HostError>;
}

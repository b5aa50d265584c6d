//! Raw GitHub API records.
//!
//! Only the fields the tracker reads are modelled; everything else in the
//! responses is ignored during deserialization.

use serde::Deserialize;

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls/{number}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestRaw {
    pub number: u64,

    #[serde(default)]
    pub title: Option<String>,

    /// Raw state, "open" or "closed".
    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub merged: bool,

    /// Absent or null when the pull request is unmerged, and for some merge
    /// strategies even when it is merged.
    #[serde(default)]
    pub merge_commit_sha: Option<String>,

    #[serde(default)]
    pub user: Option<UserRaw>,

    #[serde(default)]
    pub base: Option<RefRaw>,
}

/// Account that authored a pull request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRaw {
    pub login: String,
}

/// Branch reference of a pull request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefRaw {
    #[serde(rename = "ref")]
    pub ref_field: String,
}

/// An issue as returned by `GET /repos/{owner}/{repo}/issues/{number}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueRaw {
    pub number: u64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub html_url: Option<String>,

    /// Present only when the issue is actually a pull request.
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
}

/// The `pull_request` object GitHub attaches to issues that are pull requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestMarker {
    /// Merge timestamp. The timeline reports merged pull requests as
    /// "closed", so this is the only reliable merge signal there.
    #[serde(default)]
    pub merged_at: Option<String>,
}

/// A single issue timeline event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEvent {
    /// Event kind, e.g. "cross-referenced", "labeled", "commented".
    #[serde(default)]
    pub event: String,

    #[serde(default)]
    pub source: Option<CrossReferenceSource>,
}

/// Source of a cross-reference event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrossReferenceSource {
    #[serde(default)]
    pub issue: Option<CrossReferenceIssue>,
}

/// The issue or pull request that mentioned the current issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrossReferenceIssue {
    pub number: u64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,

    #[serde(default)]
    pub repository: Option<RepositoryRef>,
}

/// Repository a cross-reference originates from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryRef {
    pub full_name: String,
}

/// Result of `GET /repos/{owner}/{repo}/compare/{base}...{head}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub status: String,

    pub ahead_by: u64,

    /// Commits in base that head does not have. Zero means head contains base.
    pub behind_by: u64,
}

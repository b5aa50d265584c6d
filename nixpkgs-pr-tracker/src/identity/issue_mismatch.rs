//! Payload describing an issue number given where a pull request was expected.

use serde::Serialize;

use crate::related::RelatedPr;

/// An issue that was looked up as a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueMismatch {
    #[serde(rename = "issue")]
    pub number: u64,
    pub title: String,

    /// Raw issue state, "open" or "closed".
    pub state: String,
    pub url: String,

    /// Same-repository pull requests that mention the issue.
    pub related_prs: Vec<RelatedPr>,
}

//! Identity resolution error types.

use thiserror::Error;

use super::IssueMismatch;
use crate::github::HostError;

/// Errors that can occur while resolving a number to a pull request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The number belongs to an issue.
    #[error("#{} is an Issue, not a Pull Request", .0.number)]
    NotAPullRequest(IssueMismatch),

    /// Neither a pull request nor an issue exists with this number.
    #[error("PR #{number} not found in NixOS/nixpkgs")]
    NotFound { number: u64 },

    /// The pull request lookup failed but the issue lookup says it is one.
    #[error(
        "#{number} is a pull request but could not be fetched as one; \
         check GITHUB_TOKEN and its permissions"
    )]
    InconsistentHost { number: u64 },

    /// Any other host failure.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl LookupError {
    /// Returns the mismatch payload when the number is an issue.
    #[must_use]
    pub fn issue_mismatch(&self) -> Option<&IssueMismatch> {
        match self {
            Self::NotAPullRequest(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    /// Returns true when GitHub throttled or refused a request.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Host(e) if e.is_rate_limited())
    }
}

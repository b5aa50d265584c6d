//! Propagation check error types.

use thiserror::Error;

use crate::github::HostError;

/// Errors that abort a propagation check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// GitHub reports the pull request as merged without a merge commit.
    #[error("PR #{number} is merged but has no merge commit SHA")]
    MergeCommitMissing { number: u64 },

    /// Fetching the pull request itself failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The check was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

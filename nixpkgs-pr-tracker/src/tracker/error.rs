//! Tracker error types.

use crate::checker::CheckError;
use crate::config::ConfigError;
use crate::github::HostError;
use crate::identity::{IssueMismatch, LookupError};
use crate::input::InputError;

/// Errors that can occur while tracking a pull request.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The pull request reference could not be parsed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration loading or validation errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The number could not be resolved to a pull request.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The propagation check failed.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// GitHub client initialization errors.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Cancelled before completion.
    #[error("operation cancelled")]
    Cancelled,
}

impl TrackerError {
    /// Returns true when GitHub throttled or refused a request, wherever it
    /// happened.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Lookup(e) => e.is_rate_limited(),
            Self::Check(CheckError::Host(e)) | Self::Host(e) => e.is_rate_limited(),
            _ => false,
        }
    }

    /// Returns the mismatch payload when the input named an issue.
    #[must_use]
    pub fn issue_mismatch(&self) -> Option<&IssueMismatch> {
        match self {
            Self::Lookup(e) => e.issue_mismatch(),
            _ => None,
        }
    }

    /// Returns true for errors caused by bad input or configuration.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Config(_))
    }

    /// Returns true when the operation was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Check(CheckError::Cancelled))
    }
}

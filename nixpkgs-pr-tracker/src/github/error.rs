//! Repository host error types.

use thiserror::Error;

/// Errors reported by a [`RepositoryHost`](super::RepositoryHost).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The requested resource does not exist (HTTP 404).
    #[error("{resource} not found in NixOS/nixpkgs")]
    NotFound {
        /// Human readable description of what was requested.
        resource: String,
    },

    /// GitHub throttled or refused the request (HTTP 401/403/429).
    ///
    /// The message tells a rate limit apart from an authentication failure;
    /// callers only branch on the variant.
    #[error("{message}")]
    RateLimitedOrForbidden { message: String },

    /// Any other transport or API failure.
    #[error("{message}")]
    Other { message: String },
}

impl HostError {
    /// Returns true for a 404-equivalent response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true when GitHub throttled or refused the request.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitedOrForbidden { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_variants() {
        let not_found = HostError::NotFound {
            resource: "pull request #1".to_string(),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_rate_limited());
        assert_eq!(
            not_found.to_string(),
            "pull request #1 not found in NixOS/nixpkgs"
        );

        let limited = HostError::RateLimitedOrForbidden {
            message: "slow down".to_string(),
        };
        assert!(limited.is_rate_limited());
        assert!(!limited.is_not_found());
        assert_eq!(limited.to_string(), "slow down");
    }
}

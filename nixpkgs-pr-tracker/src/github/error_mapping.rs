//! Translation of octocrab failures into [`HostError`].

use http::StatusCode;
use octocrab::Octocrab;
use tracing::debug;

use super::error::HostError;
use super::rate_limit::check_core_rate_limit;

/// Message shown when GitHub throttles anonymous or token requests.
pub(super) const RATE_LIMIT_MESSAGE: &str =
    "GitHub API rate limit exceeded. Try again later or set GITHUB_TOKEN.";

/// Message shown when GitHub rejects the supplied credentials.
pub(super) const AUTH_MESSAGE: &str = "GitHub authentication failed. Check your GITHUB_TOKEN.";

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether a 403/429 response body names a rate limit.
fn mentions_rate_limit(message: &str, documentation_url: Option<&str>) -> bool {
    message.to_lowercase().contains("rate limit")
        || documentation_url.is_some_and(|url| url.contains("rate-limit"))
}

/// Maps an octocrab error raised while fetching `resource`.
///
/// A bare 403 is ambiguous, so the core rate limit is queried to tell
/// exhaustion apart from an authentication problem.
pub(super) async fn map_octocrab_error(
    client: &Octocrab,
    resource: &str,
    error: octocrab::Error,
) -> HostError {
    let (status, message, documentation_url) = match &error {
        octocrab::Error::GitHub { source, .. } => (
            source.status_code,
            source.message.clone(),
            source.documentation_url.clone(),
        ),
        _ if is_network_error(&error) => {
            return HostError::Other {
                message: format!("network error talking to GitHub: {error}"),
            };
        }
        _ => {
            return HostError::Other {
                message: format!("fetching {resource} failed: {error}"),
            };
        }
    };
    drop(error);

    match status {
        StatusCode::NOT_FOUND => HostError::NotFound {
            resource: resource.to_string(),
        },
        StatusCode::UNAUTHORIZED => HostError::RateLimitedOrForbidden {
            message: AUTH_MESSAGE.to_string(),
        },
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            let limited = mentions_rate_limit(&message, documentation_url.as_deref())
                || status == StatusCode::TOO_MANY_REQUESTS
                || core_limit_exhausted(client).await;
            let message = if limited { RATE_LIMIT_MESSAGE } else { AUTH_MESSAGE };
            HostError::RateLimitedOrForbidden {
                message: message.to_string(),
            }
        }
        _ => HostError::Other {
            message: format!("fetching {resource} failed with status {status}: {message}"),
        },
    }
}

async fn core_limit_exhausted(client: &Octocrab) -> bool {
    match check_core_rate_limit(client).await {
        Ok(info) => info.is_exhausted(),
        Err(error) => {
            debug!(error = %error, "Rate limit lookup failed");
            false
        }
    }
}

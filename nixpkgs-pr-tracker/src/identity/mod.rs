//! Deciding whether a number names a pull request, an issue or nothing.
//!
//! Issues and pull requests share one numbering space on GitHub. A 404 from
//! the pull request endpoint is therefore followed by an issue lookup, so that
//! users who pasted an issue get pointed at the pull requests that mention it.

mod error;
mod issue_mismatch;
mod pull_request;

pub use error::LookupError;
pub use issue_mismatch::IssueMismatch;
pub use pull_request::{PrState, PullRequestInfo};

use tracing::{debug, info, info_span, Instrument};

use crate::config::TimelinePages;
use crate::github::{HostError, RepositoryHost};
use crate::related::find_related_prs;

/// Resolves `number` to a pull request.
///
/// # Arguments
///
/// * `host` - Repository host to query
/// * `number` - Pull request or issue number
/// * `timeline_pages` - Pages of the issue timeline scanned for related pull
///   requests when `number` turns out to be an issue
///
/// # Errors
///
/// - [`LookupError::NotAPullRequest`] when `number` is an issue.
/// - [`LookupError::NotFound`] when neither exists.
/// - [`LookupError::InconsistentHost`] when the pull request endpoint 404s but
///   the issue endpoint reports a pull request.
/// - [`LookupError::Host`] for every other host failure, without any issue
///   lookup when the pull request fetch itself was rate limited or failed.
pub async fn resolve_identity(
    host: &dyn RepositoryHost,
    number: u64,
    timeline_pages: TimelinePages,
) -> Result<PullRequestInfo, LookupError> {
    let span = info_span!("resolve_identity", number);

    async {
        let pr_error = match host.pull_request(number).await {
            Ok(raw) => {
                let info = PullRequestInfo::from(raw);
                debug!(state = %info.state, "Resolved pull request");
                return Ok(info);
            }
            Err(e) => e,
        };

        if !pr_error.is_not_found() {
            return Err(LookupError::Host(pr_error));
        }

        debug!("Pull request not found, trying issue lookup");
        let issue = match host.issue(number).await {
            Ok(issue) => issue,
            Err(HostError::NotFound { .. }) => return Err(LookupError::NotFound { number }),
            Err(e) => return Err(LookupError::Host(e)),
        };

        if issue.pull_request.is_some() {
            return Err(LookupError::InconsistentHost { number });
        }

        let related_prs = find_related_prs(host, number, timeline_pages.get()).await;
        info!(related = related_prs.len(), "Number belongs to an issue");

        Err(LookupError::NotAPullRequest(IssueMismatch {
            number,
            title: issue.title.unwrap_or_default(),
            state: issue.state,
            url: issue.html_url.unwrap_or_default(),
            related_prs,
        }))
    }
    .instrument(span)
    .await
}

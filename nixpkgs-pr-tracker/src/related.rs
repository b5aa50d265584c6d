//! Discovery of pull requests that cross-reference an issue.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info_span, Instrument};

use crate::config::TimelinePages;
use crate::github::{pull_request_url, RepositoryHost, TimelineEvent, REPOSITORY_FULL_NAME};

const CROSS_REFERENCED: &str = "cross-referenced";

/// A pull request mentioning an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedPr {
    pub number: u64,
    pub title: String,
    pub url: String,

    /// "open", "closed" or "merged".
    pub state: String,
}

/// Collects same-repository pull requests that cross-reference `issue`.
///
/// Scans up to `max_pages` timeline pages (0 means the default), stopping at
/// the first empty or failing page. Results keep discovery order and each
/// number appears once. Failures never propagate; whatever was collected so
/// far is returned.
pub async fn find_related_prs(
    host: &dyn RepositoryHost,
    issue: u64,
    max_pages: u32,
) -> Vec<RelatedPr> {
    let max_pages = if max_pages == 0 {
        TimelinePages::DEFAULT.get()
    } else {
        max_pages
    };

    let span = info_span!("find_related_prs", issue, max_pages);

    async {
        let mut seen = HashSet::new();
        let mut related = Vec::new();

        for page in 1..=max_pages {
            let events = match host.issue_timeline(issue, page).await {
                Ok(events) => events,
                Err(e) => {
                    debug!(page, error = %e, "Stopping timeline walk on failed page");
                    break;
                }
            };

            if events.is_empty() {
                debug!(page, "Timeline exhausted");
                break;
            }

            for event in events {
                if let Some(pr) = related_pr_from_event(event) {
                    if seen.insert(pr.number) {
                        related.push(pr);
                    }
                }
            }
        }

        debug!(count = related.len(), "Collected related pull requests");
        related
    }
    .instrument(span)
    .await
}

/// Extracts a same-repository pull request from a cross-reference event.
fn related_pr_from_event(event: TimelineEvent) -> Option<RelatedPr> {
    if event.event != CROSS_REFERENCED {
        return None;
    }

    let source = event.source?.issue?;
    let marker = source.pull_request?;

    if let Some(repository) = &source.repository {
        if !repository.full_name.eq_ignore_ascii_case(REPOSITORY_FULL_NAME) {
            return None;
        }
    }

    let state = match marker.merged_at.as_deref() {
        Some(merged_at) if !merged_at.is_empty() => "merged".to_string(),
        _ => source.state,
    };

    Some(RelatedPr {
        number: source.number,
        title: source.title.unwrap_or_default(),
        url: source
            .html_url
            .unwrap_or_else(|| pull_request_url(source.number)),
        state,
    })
}

//! Octocrab-backed [`RepositoryHost`].

use std::time::Duration;

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::debug;

use super::error::HostError;
use super::error_mapping::map_octocrab_error;
use super::models::{Comparison, IssueRaw, PullRequestRaw, TimelineEvent};
use super::{RepositoryHost, REPOSITORY_FULL_NAME, TIMELINE_PAGE_SIZE};

/// Query parameters for paginated timeline requests.
#[derive(Debug, Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

/// [`RepositoryHost`] talking to the GitHub REST API through octocrab.
#[derive(Debug, Clone)]
pub struct OctocrabHost {
    client: Octocrab,
}

impl OctocrabHost {
    /// Wraps an already configured octocrab client.
    #[must_use]
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a client for the public API, or for `base_uri` when given.
    ///
    /// Requests are anonymous without a token.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Other`] if the base URI is invalid or the client
    /// cannot be constructed.
    pub fn build(
        token: Option<&str>,
        base_uri: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, HostError> {
        let mut builder = Octocrab::builder()
            .set_connect_timeout(Some(timeout))
            .set_read_timeout(Some(timeout))
            .set_write_timeout(Some(timeout));

        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        if let Some(base_uri) = base_uri {
            let uri: Uri = base_uri.parse().map_err(|error| HostError::Other {
                message: format!("invalid GitHub API base URI '{base_uri}': {error}"),
            })?;
            builder = builder.base_uri(uri).map_err(|error| HostError::Other {
                message: format!("invalid GitHub API base URI '{base_uri}': {error}"),
            })?;
        }

        let client = builder.build().map_err(|error| HostError::Other {
            message: format!("failed to build GitHub client: {error}"),
        })?;
        Ok(Self { client })
    }

    /// Returns the underlying octocrab client.
    #[must_use]
    pub fn client(&self) -> &Octocrab {
        &self.client
    }
}

#[async_trait]
impl RepositoryHost for OctocrabHost {
    async fn pull_request(&self, number: u64) -> Result<PullRequestRaw, HostError> {
        let route = format!("/repos/{REPOSITORY_FULL_NAME}/pulls/{number}");
        debug!(number, "Fetching pull request");
        match self
            .client
            .get::<PullRequestRaw, _, _>(route, None::<&()>)
            .await
        {
            Ok(pr) => Ok(pr),
            Err(e) => {
                Err(map_octocrab_error(&self.client, &format!("pull request #{number}"), e).await)
            }
        }
    }

    async fn issue(&self, number: u64) -> Result<IssueRaw, HostError> {
        let route = format!("/repos/{REPOSITORY_FULL_NAME}/issues/{number}");
        debug!(number, "Fetching issue");
        match self.client.get::<IssueRaw, _, _>(route, None::<&()>).await {
            Ok(issue) => Ok(issue),
            Err(e) => Err(map_octocrab_error(&self.client, &format!("issue #{number}"), e).await),
        }
    }

    async fn issue_timeline(
        &self,
        number: u64,
        page: u32,
    ) -> Result<Vec<TimelineEvent>, HostError> {
        let route = format!("/repos/{REPOSITORY_FULL_NAME}/issues/{number}/timeline");
        let params = PageParams {
            per_page: TIMELINE_PAGE_SIZE,
            page,
        };
        debug!(number, page, "Fetching issue timeline page");
        match self
            .client
            .get::<Vec<TimelineEvent>, _, _>(route, Some(&params))
            .await
        {
            Ok(events) => Ok(events),
            Err(e) => {
                let resource = format!("timeline of issue #{number}");
                Err(map_octocrab_error(&self.client, &resource, e).await)
            }
        }
    }

    async fn compare_commit_to_branch(
        &self,
        commit: &str,
        branch: &str,
    ) -> Result<Comparison, HostError> {
        let route = format!("/repos/{REPOSITORY_FULL_NAME}/compare/{commit}...{branch}");
        debug!(commit, branch, "Comparing commit to branch");
        match self
            .client
            .get::<Comparison, _, _>(route, None::<&()>)
            .await
        {
            Ok(comparison) => Ok(comparison),
            Err(e) => {
                let resource = format!("comparison of {commit} with branch {branch}");
                Err(map_octocrab_error(&self.client, &resource, e).await)
            }
        }
    }
}

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use nixpkgs_pr_tracker::github::{
    Comparison, CrossReferenceIssue, CrossReferenceSource, IssueRaw, PullRequestMarker,
    PullRequestRaw, RepositoryRef, TimelineEvent, UserRaw,
};
use nixpkgs_pr_tracker::{HostError, RepositoryHost};

/// Records of calls made against a [`FakeHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    PullRequest(u64),
    Issue(u64),
    Timeline(u64, u32),
    Compare(String, String),
}

/// In-memory repository host. Anything not configured is a 404.
#[derive(Default)]
pub struct FakeHost {
    pull_requests: HashMap<u64, Result<PullRequestRaw, HostError>>,
    issues: HashMap<u64, Result<IssueRaw, HostError>>,
    timeline: HashMap<(u64, u32), Result<Vec<TimelineEvent>, HostError>>,
    comparisons: HashMap<String, Result<Comparison, HostError>>,
    pending_branches: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pull_request(mut self, pr: PullRequestRaw) -> Self {
        self.pull_requests.insert(pr.number, Ok(pr));
        self
    }

    pub fn with_pull_request_error(mut self, number: u64, error: HostError) -> Self {
        self.pull_requests.insert(number, Err(error));
        self
    }

    pub fn with_issue(mut self, issue: IssueRaw) -> Self {
        self.issues.insert(issue.number, Ok(issue));
        self
    }

    pub fn with_issue_error(mut self, number: u64, error: HostError) -> Self {
        self.issues.insert(number, Err(error));
        self
    }

    pub fn with_timeline_page(mut self, issue: u64, page: u32, events: Vec<TimelineEvent>) -> Self {
        self.timeline.insert((issue, page), Ok(events));
        self
    }

    pub fn with_timeline_error(mut self, issue: u64, page: u32, error: HostError) -> Self {
        self.timeline.insert((issue, page), Err(error));
        self
    }

    /// Makes `branch` lag the merge commit by `behind_by` commits.
    pub fn with_branch(mut self, branch: &str, behind_by: u64) -> Self {
        self.comparisons.insert(
            branch.to_string(),
            Ok(Comparison {
                status: (if behind_by == 0 { "ahead" } else { "diverged" }).to_string(),
                ahead_by: 1,
                behind_by,
            }),
        );
        self
    }

    pub fn with_branch_error(mut self, branch: &str, error: HostError) -> Self {
        self.comparisons.insert(branch.to_string(), Err(error));
        self
    }

    /// Makes comparisons against `branch` never complete.
    pub fn with_pending_branch(mut self, branch: &str) -> Self {
        self.pending_branches.insert(branch.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn compare_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Compare(..)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(resource: String) -> HostError {
    HostError::NotFound { resource }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn pull_request(&self, number: u64) -> Result<PullRequestRaw, HostError> {
        self.record(Call::PullRequest(number));
        self.pull_requests
            .get(&number)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("pull request #{number}"))))
    }

    async fn issue(&self, number: u64) -> Result<IssueRaw, HostError> {
        self.record(Call::Issue(number));
        self.issues
            .get(&number)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("issue #{number}"))))
    }

    async fn issue_timeline(
        &self,
        number: u64,
        page: u32,
    ) -> Result<Vec<TimelineEvent>, HostError> {
        self.record(Call::Timeline(number, page));
        self.timeline
            .get(&(number, page))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn compare_commit_to_branch(
        &self,
        commit: &str,
        branch: &str,
    ) -> Result<Comparison, HostError> {
        self.record(Call::Compare(commit.to_string(), branch.to_string()));
        if self.pending_branches.contains(branch) {
            std::future::pending::<()>().await;
        }
        self.comparisons
            .get(branch)
            .cloned()
            .unwrap_or_else(|| Err(not_found(format!("branch {branch}"))))
    }
}

pub fn merged_pr(number: u64, merge_commit: &str) -> PullRequestRaw {
    PullRequestRaw {
        number,
        title: Some(format!("package: update for #{number}")),
        state: "closed".to_string(),
        draft: false,
        merged: true,
        merge_commit_sha: Some(merge_commit.to_string()),
        user: Some(UserRaw {
            login: "octocat".to_string(),
        }),
        base: None,
    }
}

pub fn open_pr(number: u64) -> PullRequestRaw {
    PullRequestRaw {
        number,
        title: Some("work in progress".to_string()),
        state: "open".to_string(),
        ..Default::default()
    }
}

pub fn issue(number: u64, title: &str, state: &str) -> IssueRaw {
    IssueRaw {
        number,
        title: Some(title.to_string()),
        state: state.to_string(),
        html_url: Some(format!("https://github.com/NixOS/nixpkgs/issues/{number}")),
        pull_request: None,
    }
}

/// A cross-reference from a pull request in `repository`.
pub fn cross_reference(
    number: u64,
    state: &str,
    merged_at: Option<&str>,
    repository: &str,
) -> TimelineEvent {
    TimelineEvent {
        event: "cross-referenced".to_string(),
        source: Some(CrossReferenceSource {
            issue: Some(CrossReferenceIssue {
                number,
                title: Some(format!("PR {number}")),
                state: state.to_string(),
                html_url: Some(format!("https://github.com/{repository}/pull/{number}")),
                pull_request: Some(PullRequestMarker {
                    merged_at: merged_at.map(str::to_string),
                }),
                repository: Some(RepositoryRef {
                    full_name: repository.to_string(),
                }),
            }),
        }),
    }
}

pub fn labeled() -> TimelineEvent {
    TimelineEvent {
        event: "labeled".to_string(),
        source: None,
    }
}

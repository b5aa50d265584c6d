mod support;

use std::sync::Arc;

use nixpkgs_pr_tracker::{
    default_channels, parse_channels, ChannelStatus, HostError, LookupError, TimelinePages,
    Tracker, TrackerConfig, TrackerError,
};
use support::{cross_reference, issue, merged_pr, open_pr, Call, FakeHost};
use tokio_util::sync::CancellationToken;

fn tracker(host: Arc<FakeHost>) -> Tracker {
    Tracker::with_host(TrackerConfig::default(), host)
}

#[tokio::test]
async fn tracks_merged_pull_request_across_default_channels() {
    let host = Arc::new(
        FakeHost::new()
            .with_pull_request(merged_pr(476497, "abc"))
            .with_branch("master", 0)
            .with_branch("staging-next", 0)
            .with_branch("nixpkgs-unstable", 4)
            .with_branch("nixos-unstable-small", 2)
            .with_branch("nixos-unstable", 9),
    );

    let report = tracker(host)
        .track(476497, &default_channels(), &CancellationToken::new())
        .await
        .unwrap();

    let rows: Vec<(&str, ChannelStatus)> = report
        .channels
        .iter()
        .map(|c| (c.name.as_str(), c.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("master", ChannelStatus::Present),
            ("staging-next", ChannelStatus::Present),
            ("nixos-unstable", ChannelStatus::NotPresent),
            ("nixos-unstable-small", ChannelStatus::NotPresent),
            ("nixpkgs-unstable", ChannelStatus::NotPresent),
        ]
    );
}

#[tokio::test]
async fn selected_channels_only() {
    let host = Arc::new(
        FakeHost::new()
            .with_pull_request(merged_pr(10, "abc"))
            .with_branch("nixos-unstable", 0),
    );
    let channels = parse_channels("nixos-unstable", &default_channels()).unwrap();

    let report = tracker(host.clone())
        .track(10, &channels, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.channels.len(), 1);
    assert_eq!(host.compare_calls(), 1);
}

#[tokio::test]
async fn unmerged_pull_request_succeeds() {
    let host = Arc::new(FakeHost::new().with_pull_request(open_pr(11)));

    let report = tracker(host)
        .track(11, &default_channels(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(report
        .channels
        .iter()
        .all(|c| c.status == ChannelStatus::NotPresent));
}

#[tokio::test]
async fn issue_input_surfaces_mismatch() {
    let host = Arc::new(
        FakeHost::new()
            .with_issue(issue(12345, "Some bug report", "open"))
            .with_timeline_page(
                12345,
                1,
                vec![
                    cross_reference(123456, "open", None, "NixOS/nixpkgs"),
                    cross_reference(789012, "closed", Some("2024-01-01T00:00:00Z"), "NixOS/nixpkgs"),
                    cross_reference(999, "open", None, "someone/fork"),
                ],
            ),
    );

    let err = tracker(host.clone())
        .track(12345, &default_channels(), &CancellationToken::new())
        .await
        .unwrap_err();

    let mismatch = err.issue_mismatch().expect("issue mismatch");
    let related: Vec<u64> = mismatch.related_prs.iter().map(|pr| pr.number).collect();
    assert_eq!(related, vec![123456, 789012]);
    assert!(!err.is_rate_limited());
    assert!(!err.is_usage_error());
    assert_eq!(host.compare_calls(), 0);
}

#[tokio::test]
async fn timeline_budget_comes_from_config() {
    let host = Arc::new(
        FakeHost::new()
            .with_issue(issue(5, "Bug", "open"))
            .with_timeline_page(5, 1, vec![support::labeled()])
            .with_timeline_page(5, 2, vec![support::labeled()]),
    );
    let config = TrackerConfig::default().with_timeline_pages(TimelinePages::new(1, "test").unwrap());

    let err = Tracker::with_host(config, host.clone())
        .track(5, &default_channels(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(err.issue_mismatch().is_some());
    assert!(host.calls().contains(&Call::Timeline(5, 1)));
    assert!(!host.calls().contains(&Call::Timeline(5, 2)));
}

#[tokio::test]
async fn unknown_number_is_not_found() {
    let host = Arc::new(FakeHost::new());

    let err = tracker(host)
        .track(999999, &default_channels(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TrackerError::Lookup(LookupError::NotFound { number: 999999 })
    ));
}

#[tokio::test]
async fn rate_limited_lookup_is_flagged() {
    let host = Arc::new(FakeHost::new().with_pull_request_error(
        1,
        HostError::RateLimitedOrForbidden {
            message: "GitHub API rate limit exceeded. Try again later or set GITHUB_TOKEN."
                .to_string(),
        },
    ));

    let err = tracker(host)
        .track(1, &default_channels(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn cancelled_before_resolution() {
    let host = Arc::new(FakeHost::new().with_pull_request(merged_pr(1, "abc")));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = tracker(host.clone())
        .track(1, &default_channels(), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(host.calls().is_empty());
}

mod support;

use nixpkgs_pr_tracker::{find_related_prs, HostError};
use support::{cross_reference, labeled, Call, FakeHost};

#[tokio::test]
async fn collects_same_repository_prs_in_order() {
    let host = FakeHost::new().with_timeline_page(
        12345,
        1,
        vec![
            labeled(),
            cross_reference(123456, "open", None, "NixOS/nixpkgs"),
            cross_reference(999, "open", None, "someone/fork"),
            cross_reference(789012, "closed", Some("2024-01-01T00:00:00Z"), "NixOS/nixpkgs"),
        ],
    );

    let related = find_related_prs(&host, 12345, 3).await;

    let numbers: Vec<u64> = related.iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, vec![123456, 789012]);
    assert_eq!(related[0].state, "open");
    assert_eq!(related[1].state, "merged");
    assert_eq!(related[0].url, "https://github.com/NixOS/nixpkgs/pull/123456");
}

#[tokio::test]
async fn deduplicates_across_pages() {
    let host = FakeHost::new()
        .with_timeline_page(1, 1, vec![cross_reference(10, "open", None, "NixOS/nixpkgs")])
        .with_timeline_page(
            1,
            2,
            vec![
                cross_reference(10, "closed", Some("2024-02-02T00:00:00Z"), "NixOS/nixpkgs"),
                cross_reference(11, "closed", None, "NixOS/nixpkgs"),
            ],
        );

    let related = find_related_prs(&host, 1, 3).await;

    let summary: Vec<(u64, &str)> = related
        .iter()
        .map(|pr| (pr.number, pr.state.as_str()))
        .collect();
    assert_eq!(summary, vec![(10, "open"), (11, "closed")]);
}

#[tokio::test]
async fn stops_at_empty_page() {
    let host = FakeHost::new()
        .with_timeline_page(2, 1, vec![cross_reference(20, "open", None, "NixOS/nixpkgs")])
        .with_timeline_page(2, 3, vec![cross_reference(21, "open", None, "NixOS/nixpkgs")]);

    let related = find_related_prs(&host, 2, 3).await;

    assert_eq!(related.len(), 1);
    assert_eq!(
        host.calls(),
        vec![Call::Timeline(2, 1), Call::Timeline(2, 2)]
    );
}

#[tokio::test]
async fn failing_page_keeps_earlier_results() {
    let host = FakeHost::new()
        .with_timeline_page(3, 1, vec![cross_reference(30, "open", None, "NixOS/nixpkgs")])
        .with_timeline_error(
            3,
            2,
            HostError::Other {
                message: "invalid JSON".to_string(),
            },
        )
        .with_timeline_page(3, 3, vec![cross_reference(31, "open", None, "NixOS/nixpkgs")]);

    let related = find_related_prs(&host, 3, 3).await;

    assert_eq!(related.len(), 1);
    assert_eq!(related[0].number, 30);
}

#[tokio::test]
async fn respects_page_budget() {
    let host = FakeHost::new()
        .with_timeline_page(4, 1, vec![cross_reference(40, "open", None, "NixOS/nixpkgs")])
        .with_timeline_page(4, 2, vec![cross_reference(41, "open", None, "NixOS/nixpkgs")]);

    let related = find_related_prs(&host, 4, 1).await;

    assert_eq!(related.len(), 1);
    assert_eq!(host.calls(), vec![Call::Timeline(4, 1)]);
}

#[tokio::test]
async fn zero_pages_uses_default_budget() {
    let host = FakeHost::new()
        .with_timeline_page(5, 1, vec![labeled()])
        .with_timeline_page(5, 2, vec![labeled()])
        .with_timeline_page(5, 3, vec![labeled()])
        .with_timeline_page(5, 4, vec![cross_reference(50, "open", None, "NixOS/nixpkgs")]);

    let related = find_related_prs(&host, 5, 0).await;

    assert!(related.is_empty());
    assert_eq!(host.calls().len(), 3);
}

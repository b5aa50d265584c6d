//! Tracker configuration.

use std::time::Duration;

use crate::config::TimelinePages;

/// Per-request timeout applied to connect, read and write.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`Tracker`](super::Tracker).
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// GitHub token; requests are anonymous without one.
    token: Option<String>,
    /// Timeline pages scanned for related pull requests.
    timeline_pages: TimelinePages,
    /// Timeout applied to each HTTP request.
    request_timeout: Duration,
    /// Alternative API root, e.g. a GitHub Enterprise instance or a mock.
    base_uri: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            token: None,
            timeline_pages: TimelinePages::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            base_uri: None,
        }
    }
}

impl TrackerConfig {
    /// Creates a configuration with defaults and an optional token.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeline_pages(mut self, timeline_pages: TimelinePages) -> Self {
        self.timeline_pages = timeline_pages;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Points the client at a different API root.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the timeline page budget.
    pub fn timeline_pages(&self) -> TimelinePages {
        self.timeline_pages
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the API root override.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }
}

#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod checker;
pub mod config;
pub mod github;
pub mod identity;
pub mod input;
pub mod related;
pub mod render;
pub mod tracker;

pub use checker::{
    sort_channel_results, ChannelResult, ChannelStatus, CheckError, Checker, PropagationReport,
};
pub use config::{
    available_channel_names, default_channels, parse_channels, should_use_color,
    should_use_hyperlinks, Channel, ConfigError, DisplayMode, TimelinePages, TrackerFile,
};
pub use github::{HostError, OctocrabHost, RepositoryHost};
pub use identity::{resolve_identity, IssueMismatch, LookupError, PrState, PullRequestInfo};
pub use input::{parse_pr_input, InputError};
pub use related::{find_related_prs, RelatedPr};
pub use render::{format_error, RenderError, Renderer};
pub use tracker::{Tracker, TrackerConfig, TrackerError};

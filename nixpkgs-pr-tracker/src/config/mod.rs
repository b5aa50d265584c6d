//! Configuration: channel catalogue, timeline bounds, config file and
//! terminal display decisions.

mod channel;
mod display;
mod error;
mod file;
mod timeline;

pub use channel::{available_channel_names, default_channels, parse_channels, Channel};
pub use display::{
    nerd_fonts_enabled, should_use_color, should_use_hyperlinks, DisplayMode, NO_COLOR_ENV,
    NO_HYPERLINKS_ENV, NO_NERD_FONTS_ENV,
};
pub use error::ConfigError;
pub use file::{ChannelEntry, TrackerFile};
pub use timeline::TimelinePages;

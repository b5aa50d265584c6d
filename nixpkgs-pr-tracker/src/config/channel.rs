//! Channel catalogue and selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ConfigError;

/// A named branch of NixOS/nixpkgs treated as a distribution ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Display label, unique within a catalogue.
    pub name: String,

    /// Branch name on GitHub.
    pub branch: String,
}

impl Channel {
    /// Creates a channel with a distinct name and branch.
    #[must_use]
    pub fn new(name: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branch: branch.into(),
        }
    }

    /// Creates a channel whose branch is named after it.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            branch: name.clone(),
            name,
        }
    }
}

/// Branches checked when no selection is made, roughly in the order a change
/// travels through them.
const DEFAULT_CHANNEL_NAMES: [&str; 5] = [
    "master",
    "staging-next",
    "nixpkgs-unstable",
    "nixos-unstable-small",
    "nixos-unstable",
];

/// Returns the default channel catalogue.
#[must_use]
pub fn default_channels() -> Vec<Channel> {
    DEFAULT_CHANNEL_NAMES
        .iter()
        .map(|name| Channel::named(*name))
        .collect()
}

/// Returns the channel names of a catalogue, in catalogue order.
#[must_use]
pub fn available_channel_names(channels: &[Channel]) -> Vec<&str> {
    channels.iter().map(|c| c.name.as_str()).collect()
}

/// Selects channels from `available` by a comma-separated list of names.
///
/// Names are trimmed and empty pieces ignored. Blank input selects the whole
/// catalogue. The result follows catalogue order regardless of the order the
/// names were given in; unknown names are dropped.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownChannels`] if no requested name matches.
pub fn parse_channels(input: &str, available: &[Channel]) -> Result<Vec<Channel>, ConfigError> {
    let requested: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if requested.is_empty() {
        return Ok(available.to_vec());
    }

    let selected: Vec<Channel> = available
        .iter()
        .filter(|channel| requested.contains(&channel.name.as_str()))
        .cloned()
        .collect();

    for name in &requested {
        if !available.iter().any(|c| c.name == *name) {
            debug!(channel = name, "Ignoring unknown channel");
        }
    }

    if selected.is_empty() {
        return Err(ConfigError::UnknownChannels {
            available: available_channel_names(available).join(", "),
        });
    }

    Ok(selected)
}

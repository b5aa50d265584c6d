//! Optional TOML configuration file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Channel, ConfigError, TimelinePages};

/// A channel entry in the config file. The branch defaults to the name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChannelEntry {
    pub name: String,

    #[serde(default)]
    pub branch: Option<String>,
}

/// Parsed contents of a tracker config file.
///
/// ```toml
/// timeline-pages = 5
///
/// [[channels]]
/// name = "unstable"
/// branch = "nixos-unstable"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TrackerFile {
    /// Timeline pages scanned for related pull requests.
    #[serde(default)]
    pub timeline_pages: Option<u32>,

    /// Channel catalogue replacing the built-in one.
    #[serde(default)]
    pub channels: Option<Vec<ChannelEntry>>,
}

impl TrackerFile {
    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        file.validate(&path.display().to_string())?;
        Ok(file)
    }

    /// Checks channel entries and page bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming `origin` on the first
    /// problem found.
    pub fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        if let Some(pages) = self.timeline_pages {
            TimelinePages::new(pages, origin)?;
        }

        let Some(entries) = &self.channels else {
            return Ok(());
        };

        if entries.is_empty() {
            return Err(ConfigError::ValidationError {
                origin: origin.to_string(),
                message: "channels must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    origin: origin.to_string(),
                    message: "channel name must not be empty".to_string(),
                });
            }
            if entry.branch.as_deref().is_some_and(|b| b.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    origin: origin.to_string(),
                    message: format!("branch of channel '{}' must not be empty", entry.name),
                });
            }
            let name = entry.name.trim();
            if !seen.insert(name) {
                return Err(ConfigError::ValidationError {
                    origin: origin.to_string(),
                    message: format!("duplicate channel '{name}'"),
                });
            }
        }

        Ok(())
    }

    /// Channel catalogue declared by the file, if any.
    #[must_use]
    pub fn channels(&self) -> Option<Vec<Channel>> {
        self.channels.as_ref().map(|entries| {
            entries
                .iter()
                .map(|entry| match &entry.branch {
                    Some(branch) => Channel::new(entry.name.trim(), branch.trim()),
                    None => Channel::named(entry.name.trim()),
                })
                .collect()
        })
    }
}

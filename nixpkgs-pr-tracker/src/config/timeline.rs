//! Bounds for the issue timeline walk.

use std::fmt;

use super::ConfigError;

/// Number of timeline pages scanned when looking for related pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePages(u32);

impl TimelinePages {
    /// Pages scanned unless configured otherwise.
    pub const DEFAULT: Self = Self(3);

    /// Smallest accepted value.
    pub const MIN: u32 = 1;

    /// Largest accepted value.
    pub const MAX: u32 = 10;

    /// Validates a page count.
    ///
    /// # Arguments
    ///
    /// * `pages` - Requested page count
    /// * `origin` - Where the value came from, used in the error message
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when `pages` is outside
    /// `MIN..=MAX`.
    pub fn new(pages: u32, origin: &str) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&pages) {
            Ok(Self(pages))
        } else {
            Err(ConfigError::ValidationError {
                origin: origin.to_string(),
                message: format!(
                    "timeline pages must be between {} and {}, got {pages}",
                    Self::MIN,
                    Self::MAX
                ),
            })
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for TimelinePages {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TimelinePages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

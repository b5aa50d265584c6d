//! Terminal capability decisions for color, hyperlinks and icons.

use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// Disables colored output when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Disables OSC 8 hyperlinks when set to a non-empty value.
pub const NO_HYPERLINKS_ENV: &str = "NO_HYPERLINKS";

/// Replaces Nerd Font icons with plain glyphs when set to a non-empty value.
pub const NO_NERD_FONTS_ENV: &str = "NO_NERD_FONTS";

/// How a terminal feature is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Decide from the environment and whether stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

fn env_is_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|value| !value.is_empty())
}

fn resolve(mode: DisplayMode, is_tty: bool, opt_out_env: &str) -> bool {
    match mode {
        DisplayMode::Always => true,
        DisplayMode::Never => false,
        DisplayMode::Auto => !env_is_set(opt_out_env) && is_tty,
    }
}

/// Decides whether to emit ANSI colors.
#[must_use]
pub fn should_use_color(mode: DisplayMode, is_tty: bool) -> bool {
    resolve(mode, is_tty, NO_COLOR_ENV)
}

/// Decides whether to emit OSC 8 hyperlinks. `NO_COLOR` has no effect here.
#[must_use]
pub fn should_use_hyperlinks(mode: DisplayMode, is_tty: bool) -> bool {
    resolve(mode, is_tty, NO_HYPERLINKS_ENV)
}

/// Returns false when `NO_NERD_FONTS` is set to a non-empty value.
#[must_use]
pub fn nerd_fonts_enabled() -> bool {
    !env_is_set(NO_NERD_FONTS_ENV)
}

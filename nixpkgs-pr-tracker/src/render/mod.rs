//! Terminal and JSON output.
//!
//! Reports render as a compact table with optional ANSI colors, OSC 8
//! hyperlinks and Nerd Font icons, or as pretty-printed JSON.

mod error;
mod issue;
mod pr;
mod style;

pub use error::RenderError;
pub use style::{format_error, wrap_hyperlink};

use std::io::Write;

use serde::Serialize;

use crate::config::nerd_fonts_enabled;

/// Writes reports to an output stream.
#[derive(Debug)]
pub struct Renderer<W: Write> {
    writer: W,
    use_color: bool,
    use_hyperlinks: bool,
    use_nerd_fonts: bool,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer. Nerd Font icons are on unless `NO_NERD_FONTS` is
    /// set.
    pub fn new(writer: W, use_color: bool, use_hyperlinks: bool) -> Self {
        Self {
            writer,
            use_color,
            use_hyperlinks,
            use_nerd_fonts: nerd_fonts_enabled(),
        }
    }

    /// Overrides the Nerd Font decision.
    #[must_use]
    pub fn with_nerd_fonts(mut self, use_nerd_fonts: bool) -> Self {
        self.use_nerd_fonts = use_nerd_fonts;
        self
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes `value` as two-space indented JSON followed by a newline.
    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Formats a headline: colored icon, bold text, optionally hyperlinked.
    fn headline(&self, icon: &str, color: &str, text: &str, url: &str) -> String {
        let display = if self.use_color {
            format!("{color}{icon} {}{text}{}", style::BOLD, style::RESET)
        } else {
            format!("{icon} {text}")
        };

        if self.use_hyperlinks && !url.is_empty() {
            wrap_hyperlink(&display, url)
        } else {
            display
        }
    }
}

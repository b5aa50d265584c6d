//! Propagation report rendering.

use std::io::Write;

use super::style::{
    paint, pr_state_style, GRAY, GREEN, ICON_NOT_PRESENT, ICON_PRESENT, ICON_UNKNOWN, RED, YELLOW,
};
use super::{RenderError, Renderer};
use crate::checker::{ChannelStatus, PropagationReport};
use crate::github::pull_request_url;

const CHANNEL_HEADER: &str = "CHANNEL";
const STATUS_HEADER: &str = "STATUS";

impl<W: Write> Renderer<W> {
    /// Writes `report` as a headline followed by a channel table.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if writing fails.
    pub fn render_table(&mut self, report: &PropagationReport) -> Result<(), RenderError> {
        let (icon, color) = pr_state_style(report.state.as_str(), self.use_nerd_fonts);
        let mut text = format!("PR #{}", report.number);
        if let Some(title) = &report.title {
            text = format!("{text} ({title})");
        }
        let headline = self.headline(icon, color, &text, &pull_request_url(report.number));
        writeln!(self.writer, "{headline}")?;

        if let Some(author) = &report.author {
            let line = paint(&format!("by: {author}"), GRAY, self.use_color);
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;

        let width = report
            .channels
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max(CHANNEL_HEADER.len());

        writeln!(self.writer, "{CHANNEL_HEADER:<width$}  {STATUS_HEADER}")?;
        writeln!(self.writer, "{}", "-".repeat(width + 2 + STATUS_HEADER.len()))?;

        for channel in &report.channels {
            let icon = self.status_icon(channel.status);
            writeln!(self.writer, "{:<width$}    {icon}  ", channel.name)?;
        }

        Ok(())
    }

    /// Writes `report` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if serialization or writing fails.
    pub fn render_json(&mut self, report: &PropagationReport) -> Result<(), RenderError> {
        self.write_json(report)
    }

    fn status_icon(&self, status: ChannelStatus) -> String {
        let (icon, color) = match status {
            ChannelStatus::Present => (ICON_PRESENT, GREEN),
            ChannelStatus::NotPresent => (ICON_NOT_PRESENT, RED),
            ChannelStatus::Unknown => (ICON_UNKNOWN, YELLOW),
        };
        paint(icon, color, self.use_color)
    }
}

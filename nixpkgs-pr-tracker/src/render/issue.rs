//! Rendering of the "input is an issue" outcome.

use std::io::Write;

use serde::Serialize;

use super::style::{issue_state_style, paint, pr_state_style, BOLD, RED, RESET};
use super::{wrap_hyperlink, RenderError, Renderer};
use crate::identity::IssueMismatch;
use crate::related::RelatedPr;

const WARNING_LINE: &str = "WARNING: input is an issue, not a pull request";

/// JSON document emitted instead of a report when the input is an issue.
#[derive(Serialize)]
struct IssueErrorDocument<'a> {
    error: &'static str,
    #[serde(flatten)]
    mismatch: &'a IssueMismatch,
}

impl<W: Write> Renderer<W> {
    /// Writes a warning naming the issue, followed by the pull requests that
    /// reference it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if writing fails.
    pub fn render_issue_warning(&mut self, mismatch: &IssueMismatch) -> Result<(), RenderError> {
        writeln!(self.writer, "{}", paint(WARNING_LINE, RED, self.use_color))?;

        let (icon, color) = issue_state_style(&mismatch.state, self.use_nerd_fonts);
        let mut text = format!("Issue #{}", mismatch.number);
        if !mismatch.title.is_empty() {
            text = format!("{text} ({})", mismatch.title);
        }
        let headline = self.headline(icon, color, &text, &mismatch.url);
        writeln!(self.writer, "{headline}")?;
        writeln!(self.writer)?;

        if !mismatch.related_prs.is_empty() {
            self.render_related_prs(&mismatch.related_prs)?;
        }

        Ok(())
    }

    /// Writes the issue mismatch as a JSON error document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if serialization or writing fails.
    pub fn render_issue_json(&mut self, mismatch: &IssueMismatch) -> Result<(), RenderError> {
        self.write_json(&IssueErrorDocument {
            error: "not_a_pull_request",
            mismatch,
        })
    }

    fn render_related_prs(&mut self, prs: &[RelatedPr]) -> Result<(), RenderError> {
        writeln!(self.writer, "Related pull requests:")?;
        writeln!(self.writer)?;

        let width = prs
            .iter()
            .map(|pr| format!("#{}", pr.number).len())
            .max()
            .unwrap_or(0)
            .max(2);

        for pr in prs {
            let (icon, color) = pr_state_style(&pr.state, self.use_nerd_fonts);
            let number = format!("#{}", pr.number);

            let mut content = if self.use_color {
                format!(
                    "{}  {BOLD}{number:<width$}{RESET}  {}",
                    paint(icon, color, true),
                    pr.title
                )
            } else {
                format!("{icon}  {number:<width$}  {}", pr.title)
            };

            if self.use_hyperlinks && !pr.url.is_empty() {
                content = wrap_hyperlink(&content, &pr.url);
            }

            writeln!(self.writer, "  {content}")?;
        }

        Ok(())
    }
}

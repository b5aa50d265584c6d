//! ANSI styling, icons and OSC 8 hyperlinks.

pub(super) const RESET: &str = "\x1b[0m";
pub(super) const BOLD: &str = "\x1b[1m";

// 256-color palette indices 0-15 follow the terminal theme.
pub(super) const GRAY: &str = "\x1b[38;5;8m";
pub(super) const RED: &str = "\x1b[38;5;9m";
pub(super) const GREEN: &str = "\x1b[38;5;10m";
pub(super) const YELLOW: &str = "\x1b[38;5;11m";
pub(super) const PURPLE: &str = "\x1b[38;5;13m";

pub(super) const ICON_PRESENT: &str = "✓";
pub(super) const ICON_NOT_PRESENT: &str = "✗";
pub(super) const ICON_UNKNOWN: &str = "?";

// Nerd Font octicons.
pub(super) const NF_PR_DRAFT: &str = "\u{f4dd}";
pub(super) const NF_PR_OPEN: &str = "\u{f407}";
pub(super) const NF_PR_MERGED: &str = "\u{f419}";
pub(super) const NF_PR_CLOSED: &str = "\u{f4dc}";
pub(super) const NF_ISSUE_OPEN: &str = "\u{f41b}";
pub(super) const NF_ISSUE_CLOSED: &str = "\u{f41d}";
pub(super) const NF_ISSUE_DRAFT: &str = "\u{f4e7}";

pub(super) const FALLBACK_ICON: &str = "●";

/// Wraps `text` in an OSC 8 hyperlink to `url`.
#[must_use]
pub fn wrap_hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

/// Returns `text` wrapped in `color` when `use_color` is set.
pub(super) fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Icon and color for a pull request state name.
pub(super) fn pr_state_style(state: &str, nerd_fonts: bool) -> (&'static str, &'static str) {
    let pick = |nerd: &'static str| if nerd_fonts { nerd } else { FALLBACK_ICON };
    match state {
        "draft" => (pick(NF_PR_DRAFT), GRAY),
        "open" => (pick(NF_PR_OPEN), GREEN),
        "merged" => (pick(NF_PR_MERGED), PURPLE),
        "closed" => (pick(NF_PR_CLOSED), RED),
        _ => (FALLBACK_ICON, YELLOW),
    }
}

/// Icon and color for an issue state name.
pub(super) fn issue_state_style(state: &str, nerd_fonts: bool) -> (&'static str, &'static str) {
    let pick = |nerd: &'static str| if nerd_fonts { nerd } else { FALLBACK_ICON };
    match state {
        "open" => (pick(NF_ISSUE_OPEN), GREEN),
        "closed" => (pick(NF_ISSUE_CLOSED), PURPLE),
        "draft" => (pick(NF_ISSUE_DRAFT), GRAY),
        _ => (FALLBACK_ICON, YELLOW),
    }
}

/// Formats `message` as a single error line, red when colored.
#[must_use]
pub fn format_error(message: &str, use_color: bool) -> String {
    paint(&format!("Error: {message}"), RED, use_color)
}

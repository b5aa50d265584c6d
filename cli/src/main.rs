//! CLI for the nixpkgs PR tracker.
//!
//! Resolves a pull request number or URL and shows which NixOS/nixpkgs
//! channels already contain its merge commit.

use clap::Parser;
use nixpkgs_pr_tracker::{
    default_channels, format_error, parse_channels, parse_pr_input, should_use_color,
    should_use_hyperlinks, Channel, ConfigError, DisplayMode, PropagationReport, Renderer, TimelinePages,
    Tracker, TrackerConfig, TrackerError, TrackerFile,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for bad input, configuration or usage.
const EXIT_USAGE: u8 = 2;

/// Exit code when GitHub throttled or refused a request.
const EXIT_RATE_LIMITED: u8 = 3;

/// Track which nixpkgs channels contain a given pull request.
#[derive(Parser, Debug)]
#[command(name = "nprt", author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Pull request number or URL, e.g. 476497 or
    /// https://github.com/NixOS/nixpkgs/pull/476497.
    input: String,

    /// Comma-separated list of channels to check.
    #[arg(long)]
    channels: Option<String>,

    /// Color output mode: auto, always, never.
    #[arg(long, default_value = "auto")]
    color: DisplayMode,

    /// Hyperlink output mode: auto, always, never.
    #[arg(long, default_value = "auto")]
    hyperlinks: DisplayMode,

    /// Output results as JSON.
    #[arg(long)]
    json: bool,

    /// Show detailed progress and debug information on stderr.
    #[arg(long)]
    verbose: bool,

    /// Timeline pages scanned for related pull requests when the input is an
    /// issue.
    #[arg(
        long,
        env = "NPRT_TIMELINE_PAGES",
        value_parser = clap::value_parser!(u32).range(1..=10)
    )]
    timeline_pages: Option<u32>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token for higher rate limits.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

/// Output decisions shared by the success and failure paths.
#[derive(Debug, Clone, Copy)]
struct Display {
    json: bool,
    stdout_color: bool,
    stderr_color: bool,
    hyperlinks: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("TLS crypto provider already installed");
    }

    let stdout_tty = std::io::stdout().is_terminal();
    let display = Display {
        json: args.json,
        stdout_color: should_use_color(args.color, stdout_tty),
        stderr_color: should_use_color(args.color, std::io::stderr().is_terminal()),
        hyperlinks: should_use_hyperlinks(args.hyperlinks, stdout_tty),
    };

    let cancel = CancellationToken::new();
    spawn_signal_handler(cancel.clone());

    match track(args, &cancel).await {
        Ok(report) => render_report(&report, display),
        Err(e) => report_failure(&e, display),
    }
}

/// Initializes tracing on stderr.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` enables debug output for
/// the tracker and only warnings are shown by default.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "nixpkgs_pr_tracker=debug,nprt=debug,warn"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        // Stdout carries the report, so logs go to stderr
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}

/// Cancels `cancel` on Ctrl-C.
fn spawn_signal_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupted, cancelling");
                cancel.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });
}

/// Main execution logic.
async fn track(
    args: Args,
    cancel: &CancellationToken,
) -> Result<PropagationReport, TrackerError> {
    let number = parse_pr_input(&args.input)?;

    let file = match &args.config {
        Some(path) => Some(TrackerFile::load(path)?),
        None => None,
    };

    let catalogue: Vec<Channel> = file
        .as_ref()
        .and_then(TrackerFile::channels)
        .unwrap_or_else(default_channels);
    let channels = parse_channels(args.channels.as_deref().unwrap_or_default(), &catalogue)?;

    let timeline_pages = timeline_pages(
        args.timeline_pages,
        file.as_ref().and_then(|f| f.timeline_pages),
        args.config.as_deref(),
    )?;

    let config = TrackerConfig::new(args.token).with_timeline_pages(timeline_pages);
    let tracker = Tracker::new(config)?;
    tracker.track(number, &channels, cancel).await
}

/// Picks the timeline page count: flag or env first, then the config file.
fn timeline_pages(
    from_args: Option<u32>,
    from_file: Option<u32>,
    config_path: Option<&Path>,
) -> Result<TimelinePages, ConfigError> {
    match (from_args, from_file) {
        (Some(pages), _) => TimelinePages::new(pages, "--timeline-pages"),
        (None, Some(pages)) => {
            let origin = config_path.map_or_else(
                || "config file".to_string(),
                |path| path.display().to_string(),
            );
            TimelinePages::new(pages, &origin)
        }
        (None, None) => Ok(TimelinePages::default()),
    }
}

fn render_report(report: &PropagationReport, display: Display) -> ExitCode {
    let mut renderer = Renderer::new(
        std::io::stdout().lock(),
        display.stdout_color,
        display.hyperlinks,
    );
    let result = if display.json {
        renderer.render_json(report)
    } else {
        renderer.render_table(report)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                format_error(&format!("rendering output: {e}"), display.stderr_color)
            );
            ExitCode::FAILURE
        }
    }
}

/// Prints `error` and maps it to an exit code.
///
/// An issue given instead of a pull request is rendered like a result on
/// stdout but still fails the run.
fn report_failure(error: &TrackerError, display: Display) -> ExitCode {
    if let Some(mismatch) = error.issue_mismatch() {
        let mut renderer = Renderer::new(
            std::io::stdout().lock(),
            display.stdout_color,
            display.hyperlinks,
        );
        let result = if display.json {
            renderer.render_issue_json(mismatch)
        } else {
            renderer.render_issue_warning(mismatch)
        };
        if let Err(e) = result {
            eprintln!(
                "{}",
                format_error(&format!("rendering output: {e}"), display.stderr_color)
            );
        }
        return ExitCode::FAILURE;
    }

    eprintln!("{}", format_error(&error.to_string(), display.stderr_color));

    if error.is_rate_limited() {
        ExitCode::from(EXIT_RATE_LIMITED)
    } else if error.is_usage_error() {
        ExitCode::from(EXIT_USAGE)
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_args() {
        let args = Args::try_parse_from(["nprt", "476497"]).unwrap();
        assert_eq!(args.input, "476497");
        assert_eq!(args.color, DisplayMode::Auto);
        assert!(!args.json);
        assert!(args.channels.is_none());
    }

    #[test]
    fn accepts_negative_numbers_as_input() {
        let args = Args::try_parse_from(["nprt", "-5"]).unwrap();
        assert_eq!(args.input, "-5");
    }

    #[test]
    fn flags_may_follow_input() {
        let args = Args::try_parse_from([
            "nprt",
            "https://github.com/NixOS/nixpkgs/pull/1",
            "--json",
            "--channels",
            "master,nixos-unstable",
            "--color=never",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.channels.as_deref(), Some("master,nixos-unstable"));
        assert_eq!(args.color, DisplayMode::Never);
    }

    #[test]
    fn rejects_invalid_color_mode() {
        assert!(Args::try_parse_from(["nprt", "1", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_timeline_pages() {
        temp_env::with_var_unset("NPRT_TIMELINE_PAGES", || {
            assert!(Args::try_parse_from(["nprt", "1", "--timeline-pages", "0"]).is_err());
            assert!(Args::try_parse_from(["nprt", "1", "--timeline-pages", "11"]).is_err());
            let args = Args::try_parse_from(["nprt", "1", "--timeline-pages", "4"]).unwrap();
            assert_eq!(args.timeline_pages, Some(4));
        });
    }

    #[test]
    fn timeline_pages_prefer_args_over_file() {
        let path = Path::new("nprt.toml");
        assert_eq!(timeline_pages(Some(4), Some(7), Some(path)).unwrap().get(), 4);
        assert_eq!(timeline_pages(None, Some(7), Some(path)).unwrap().get(), 7);
        assert_eq!(timeline_pages(None, None, None).unwrap(), TimelinePages::default());
    }

    #[test]
    fn file_timeline_pages_errors_name_the_file() {
        let err = timeline_pages(None, Some(0), Some(Path::new("nprt.toml"))).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("nprt.toml"));
        assert!(!message.contains("--timeline-pages"));
    }

    #[test]
    fn requires_input() {
        let err = Args::try_parse_from(["nprt"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

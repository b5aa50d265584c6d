//! Parsing of user-supplied pull request references.

use thiserror::Error;
use url::Url;

use crate::github::{REPOSITORY_NAME, REPOSITORY_OWNER};

/// Errors produced when a pull request reference cannot be understood.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// The reference named zero or a negative number.
    #[error("PR number must be positive")]
    NonPositive,

    /// The reference is neither a number nor a NixOS/nixpkgs URL.
    #[error(
        "invalid PR reference '{input}': expected a number, \
         https://github.com/NixOS/nixpkgs/pull/<number> or \
         https://github.com/NixOS/nixpkgs/issues/<number>"
    )]
    Invalid { input: String },
}

/// Resolves a bare number or a NixOS/nixpkgs pull request or issue URL to a
/// positive number.
///
/// Issue URLs are accepted on purpose: the identity lookup later explains the
/// mismatch and lists related pull requests.
///
/// # Errors
///
/// Returns [`InputError::NonPositive`] for zero or negative numbers and
/// [`InputError::Invalid`] for anything else that is not recognised.
pub fn parse_pr_input(raw: &str) -> Result<u64, InputError> {
    let input = raw.trim();

    if let Ok(number) = input.parse::<i64>() {
        return u64::try_from(number)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(InputError::NonPositive);
    }

    // Decimal strings too large for i64 are still numbers.
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse::<u64>().map_err(|_| InputError::Invalid {
            input: input.to_string(),
        });
    }

    match number_from_url(input) {
        Some(0) => Err(InputError::NonPositive),
        Some(number) => Ok(number),
        None => Err(InputError::Invalid {
            input: input.to_string(),
        }),
    }
}

fn number_from_url(input: &str) -> Option<u64> {
    let url = Url::parse(input).ok()?;

    // Anything the parser had to normalise (host case, default port, dot
    // segments) was not written in canonical form.
    if url.as_str() != input {
        return None;
    }

    if url.scheme() != "https"
        || url.host_str() != Some("github.com")
        || url.port().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return None;
    }

    let mut segments: Vec<&str> = url.path_segments()?.collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }

    match segments.as_slice() {
        [owner, repo, "pull" | "issues", number]
            if *owner == REPOSITORY_OWNER && *repo == REPOSITORY_NAME =>
        {
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            number.parse().ok()
        }
        _ => None,
    }
}

//! Rendering error types.

/// Errors that can occur while writing output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing JSON output failed.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for prism-core.

use std::io;

use thiserror::Error;

/// Errors raised while rendering the demo.
///
/// There is no recovery path for any of these: the caller reports them and
/// terminates.
#[derive(Error, Debug)]
pub enum PrismError {
    /// Writing or flushing the output stream failed (closed pipe, full disk, ...).
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),

    /// Reading the pacing line from the input source failed.
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    /// A color mode string was neither `always` nor `never`.
    #[error("Invalid color mode `{0}`. Use 'always' or 'never'.")]
    InvalidColorMode(String),
}

/// Result alias used across prism-core.
pub type Result<T> = std::result::Result<T, PrismError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_mode_message() {
        let err = PrismError::InvalidColorMode("sometimes".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid color mode `sometimes`. Use 'always' or 'never'."
        );
    }

    #[test]
    fn test_output_error_keeps_source() {
        let err = PrismError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.to_string().contains("pipe closed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

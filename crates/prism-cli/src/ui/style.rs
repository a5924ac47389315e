//! Diagnostic styling for CLI messages on stderr.
//!
//! Demo output goes through `prism_core`; this module only formats the
//! program's own messages about itself.
//!
//! | Prefix | Meaning | Color |
//! |--------|---------|-------|
//! | `[err]` | Error | Red |
//! | `[warn]` | Warning | Yellow |

use owo_colors::OwoColorize;
use prism_core::ColorMode;

/// Message type for CLI diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Error - command failed
    Err,
    /// Warning - command continued with caveats
    Warn,
}

impl MessageType {
    /// Returns the prefix text for this message type.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Err => "[err]",
            Self::Warn => "[warn]",
        }
    }
}

/// Formats CLI diagnostics, colored according to the `--color` flag.
///
/// # Example
///
/// ```ignore
/// let style = Style::new(ColorMode::Never);
/// assert_eq!(style.message(MessageType::Err, "Failed"), "[err] Failed");
/// ```
#[derive(Debug, Clone)]
pub struct Style {
    color_mode: ColorMode,
}

impl Style {
    pub fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(&self) -> bool {
        self.color_mode.is_enabled()
    }

    /// Format a simple message with a type prefix.
    pub fn message(&self, msg_type: MessageType, text: &str) -> String {
        let prefix = msg_type.prefix();
        if self.colors_enabled() {
            let colored_prefix = match msg_type {
                MessageType::Err => prefix.red().to_string(),
                MessageType::Warn => prefix.yellow().to_string(),
            };
            format!("{} {}", colored_prefix, text)
        } else {
            format!("{} {}", prefix, text)
        }
    }

    /// Format an error with optional cause and hint lines.
    pub fn error_with_context(
        &self,
        msg: &str,
        cause: Option<&str>,
        hint: Option<&str>,
    ) -> String {
        let mut output = self.message(MessageType::Err, msg);

        if let Some(cause_text) = cause {
            output.push('\n');
            output.push_str(&format!("      Cause: {}", cause_text));
        }

        if let Some(hint_text) = hint {
            output.push('\n');
            output.push_str(&format!("      Hint: {}", hint_text));
        }

        output
    }

    /// Format a section header (bold when colors are on).
    pub fn section(&self, title: &str) -> String {
        if self.colors_enabled() {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }
}

//! Styling session: output mode and the console writer.
//!
//! The session decides how a [`StyledLine`] turns into bytes. It replaces a
//! process-wide "init once" call with an explicit [`SessionConfig`] owned by
//! the [`Console`], so rendering depends only on its inputs.
//!
//! | Mode | Auto-revert | Bytes written for a styled line |
//! |------|-------------|---------------------------------|
//! | `Never` | any | text |
//! | `Always` | on | prefix, text, `ESC[0m` |
//! | `Always` | off | prefix, text |
//!
//! Without auto-revert the console remembers that a style is still active and
//! [`Console::end_session`] writes the reset that closes it.

use std::io::Write;

use tracing::debug;

use crate::errors::{PrismError, Result};
use crate::line::StyledLine;
use crate::status::status_line;

/// Whether escape sequences are emitted at all.
///
/// There is no auto-detection: the terminal is trusted to render what it
/// receives, and raw escapes may show up on targets that cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Emit escape sequences.
    #[default]
    Always,
    /// Emit plain text only.
    Never,
}

impl ColorMode {
    /// Check if escape sequences should be written.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Always)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = PrismError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(PrismError::InvalidColorMode(s.to_string())),
        }
    }
}

/// Output configuration for one styling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reset the terminal appearance after every styled write.
    pub autoreset: bool,
    /// Whether escape sequences are emitted.
    pub color: ColorMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoreset: true,
            color: ColorMode::Always,
        }
    }
}

impl SessionConfig {
    /// Builder-style override of the auto-revert flag.
    pub fn with_autoreset(mut self, autoreset: bool) -> Self {
        self.autoreset = autoreset;
        self
    }

    /// Builder-style override of the color mode.
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

/// A writer bound to a [`SessionConfig`].
///
/// Every method writes whole lines; nothing is buffered beyond what the
/// underlying writer buffers.
#[derive(Debug)]
pub struct Console<W: Write> {
    config: SessionConfig,
    out: W,
    /// A style was written without auto-revert and has not been reset since.
    styles_open: bool,
}

impl<W: Write> Console<W> {
    /// Start a session on `out`.
    pub fn new(config: SessionConfig, out: W) -> Self {
        debug!(autoreset = config.autoreset, color = %config.color, "styling session started");
        Self {
            config,
            out,
            styles_open: false,
        }
    }

    /// Render and write one styled line.
    pub fn write_line(&mut self, line: &StyledLine) -> Result<()> {
        let rendered = line.render(&self.config);
        writeln!(self.out, "{}", rendered).map_err(PrismError::Output)?;

        if !self.config.autoreset && self.config.color.is_enabled() {
            let (reset, active) = line.split_reset();
            if reset {
                self.styles_open = false;
            }
            if !active.is_empty() {
                self.styles_open = true;
            }
        }
        Ok(())
    }

    /// Write one line of unstyled text.
    pub fn write_plain(&mut self, text: &str) -> Result<()> {
        self.write_line(&StyledLine::new(text))
    }

    /// Whether a style is still active on the terminal.
    pub fn styles_open(&self) -> bool {
        self.styles_open
    }

    /// Reset the terminal if a style is still active. No newline is written.
    ///
    /// Only ever writes something when auto-revert is off.
    pub fn end_session(&mut self) -> Result<()> {
        if !self.styles_open {
            return Ok(());
        }
        debug!("resetting styles left open");
        let reset = StyledLine::new("").reset().render(&self.config);
        write!(self.out, "{}", reset).map_err(PrismError::Output)?;
        self.styles_open = false;
        Ok(())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out).map_err(PrismError::Output)
    }

    /// Write one status line (bright, category color, label, message).
    pub fn status(&mut self, message: &str, category: &str) -> Result<()> {
        self.write_line(&status_line(message, category))
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(PrismError::Output)
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

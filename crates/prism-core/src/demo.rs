//! The demo driver.
//!
//! Runs the four phases in a fixed order on a [`Console`]:
//!
//! 1. banner and terminal hint
//! 2. basic colors (one token per line)
//! 3. combined styles (intensity, foreground, background per line)
//! 4. status messages
//!
//! and then waits for one line from an [`InputSource`].

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::errors::{PrismError, Result};
use crate::line::StyledLine;
use crate::session::{Console, SessionConfig};
use crate::token::Color;

pub const BANNER: &str = "Console Styling Demo Starting...";
pub const CLOSING_PROMPT: &str = "Demo complete. Press Enter to exit.";

/// Literal (message, category) pairs shown by the status phase.
pub const STATUS_SAMPLES: [(&str, &str); 5] = [
    ("Program started.", "info"),
    ("Data loaded successfully.", "success"),
    ("Disk space is getting low.", "warning"),
    ("Could not connect to the server.", "error"),
    ("This is a custom type.", "custom"),
];

/// Source of the final "press Enter" line.
pub trait InputSource {
    /// Block until one line is available, then discard it.
    fn wait_for_line(&mut self) -> io::Result<()>;
}

/// Reads and discards one line. End of input counts as a line.
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn wait_for_line(&mut self) -> io::Result<()> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line)?;
        debug!(bytes = read, "pacing line received");
        Ok(())
    }
}

/// Returns immediately. For non-interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWait;

impl InputSource for NoWait {
    fn wait_for_line(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Single-pass demo driver.
pub struct Demo<W: Write, I: InputSource> {
    console: Console<W>,
    input: I,
}

impl<W: Write, I: InputSource> Demo<W, I> {
    pub fn new(config: SessionConfig, out: W, input: I) -> Self {
        Self {
            console: Console::new(config, out),
            input,
        }
    }

    /// Run every phase, then wait for the pacing line.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        self.basic_colors()?;
        self.combined_colors()?;
        self.status_messages()?;
        self.finish()
    }

    /// Banner plus the hint about running in a real terminal.
    pub fn banner(&mut self) -> Result<()> {
        let c = &mut self.console;
        c.write_plain(BANNER)?;
        c.write_plain("If you are running this inside an editor pane and don't see colors,")?;
        c.write_plain("try running this program from a real terminal instead.")?;
        c.blank()
    }

    /// One styling token per line.
    pub fn basic_colors(&mut self) -> Result<()> {
        debug!("basic color phase");
        let lines = [
            StyledLine::new("This text is RED.").fore(Color::Red),
            StyledLine::new("This text is GREEN.").fore(Color::Green),
            StyledLine::new("This text is BLUE.").fore(Color::Blue),
            StyledLine::new("This has a YELLOW background.").back(Color::Yellow),
            StyledLine::new("This has a CYAN background.").back(Color::Cyan),
            StyledLine::new("This text is BRIGHT (bold).").bright(),
            StyledLine::new("This text is DIM (less intense).").dim(),
        ];

        let c = &mut self.console;
        c.write_plain("=== BASIC COLOR DEMO ===")?;
        for line in &lines {
            c.write_line(line)?;
        }
        c.write_plain("Back to normal text after each line because of auto-revert.")?;
        c.blank()
    }

    /// Intensity, foreground and background tokens stacked on each line.
    pub fn combined_colors(&mut self) -> Result<()> {
        debug!("combined color phase");
        let lines = [
            StyledLine::new("Bright WHITE text on RED background")
                .bright()
                .fore(Color::White)
                .back(Color::Red),
            StyledLine::new("Bright BLACK text on GREEN background")
                .bright()
                .fore(Color::Black)
                .back(Color::Green),
            StyledLine::new("Dim YELLOW text on BLUE background")
                .dim()
                .fore(Color::Yellow)
                .back(Color::Blue),
        ];

        let c = &mut self.console;
        c.write_plain("=== COMBINED COLOR DEMO ===")?;
        for line in &lines {
            c.write_line(line)?;
        }
        c.write_plain("Normal text again after combined styles.")?;
        c.blank()
    }

    /// The five sample status lines.
    pub fn status_messages(&mut self) -> Result<()> {
        debug!("status message phase");
        let c = &mut self.console;
        c.write_plain("=== STATUS MESSAGE DEMO ===")?;
        for (message, category) in STATUS_SAMPLES {
            c.status(message, category)?;
        }
        c.blank()
    }

    /// Reset any style left open, closing prompt, flush, then block on the
    /// input source.
    pub fn finish(&mut self) -> Result<()> {
        self.console.end_session()?;
        self.console.write_plain(CLOSING_PROMPT)?;
        self.console.flush()?;
        self.input.wait_for_line().map_err(PrismError::Input)
    }

    /// Reset any style left open, flush and give back the writer.
    pub fn into_writer(mut self) -> Result<W> {
        self.console.end_session()?;
        self.console.flush()?;
        Ok(self.console.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ColorMode;

    fn plain_demo() -> Demo<Vec<u8>, NoWait> {
        Demo::new(
            SessionConfig::default().with_color(ColorMode::Never),
            Vec::new(),
            NoWait,
        )
    }

    fn lines(demo: Demo<Vec<u8>, NoWait>) -> Vec<String> {
        let out = demo.into_writer().unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_basic_phase_order() {
        let mut demo = plain_demo();
        demo.basic_colors().unwrap();
        let lines = lines(demo);
        assert_eq!(lines[0], "=== BASIC COLOR DEMO ===");
        assert_eq!(lines[1], "This text is RED.");
        assert_eq!(lines[7], "This text is DIM (less intense).");
        assert_eq!(lines[8], "Back to normal text after each line because of auto-revert.");
        assert_eq!(lines[9], "");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_combined_phase_order() {
        let mut demo = plain_demo();
        demo.combined_colors().unwrap();
        let lines = lines(demo);
        assert_eq!(
            lines,
            vec![
                "=== COMBINED COLOR DEMO ===",
                "Bright WHITE text on RED background",
                "Bright BLACK text on GREEN background",
                "Dim YELLOW text on BLUE background",
                "Normal text again after combined styles.",
                "",
            ]
        );
    }

    #[test]
    fn test_status_phase() {
        let mut demo = plain_demo();
        demo.status_messages().unwrap();
        let lines = lines(demo);
        assert_eq!(
            lines,
            vec![
                "=== STATUS MESSAGE DEMO ===",
                "[INFO]    Program started.",
                "[SUCCESS] Data loaded successfully.",
                "[WARNING] Disk space is getting low.",
                "[ERROR]   Could not connect to the server.",
                "[OTHER]   This is a custom type.",
                "",
            ]
        );
    }

    #[test]
    fn test_finish_resets_before_prompt_without_autoreset() {
        let config = SessionConfig::default().with_autoreset(false);
        let mut demo = Demo::new(config, Vec::new(), NoWait);
        demo.combined_colors().unwrap();
        demo.finish().unwrap();

        let out = String::from_utf8(demo.into_writer().unwrap()).unwrap();
        let closing = format!("{}{}\n", crate::line::RESET, CLOSING_PROMPT);
        assert!(out.ends_with(&closing), "output: {:?}", out);
        assert_eq!(out.matches(crate::line::RESET).count(), 1);
    }

    #[test]
    fn test_into_writer_resets_open_styles() {
        let config = SessionConfig::default().with_autoreset(false);
        let mut demo = Demo::new(config, Vec::new(), NoWait);
        demo.basic_colors().unwrap();

        let out = String::from_utf8(demo.into_writer().unwrap()).unwrap();
        assert!(out.ends_with(crate::line::RESET));
    }

    #[test]
    fn test_line_reader_accepts_eof() {
        let mut reader = LineReader::new(io::Cursor::new(Vec::new()));
        assert!(reader.wait_for_line().is_ok());
    }

    #[test]
    fn test_line_reader_consumes_one_line() {
        let mut cursor = io::Cursor::new(b"first\nsecond\n".to_vec());
        {
            let mut reader = LineReader::new(&mut cursor);
            reader.wait_for_line().unwrap();
        }
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_input_error_is_reported() {
        struct Broken;
        impl InputSource for Broken {
            fn wait_for_line(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::Other, "stdin gone"))
            }
        }

        let mut demo = Demo::new(SessionConfig::default(), Vec::new(), Broken);
        assert!(matches!(demo.finish(), Err(PrismError::Input(_))));
    }
}

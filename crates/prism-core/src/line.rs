//! Styled lines: tokens followed by literal text.

use crate::session::SessionConfig;
use crate::token::{compose, Color, Token};

/// SGR "reset all attributes" sequence.
pub const RESET: &str = "\x1b[0m";

/// An ordered run of style tokens applied to one piece of text.
///
/// Built right before it is written and dropped afterwards.
///
/// # Example
///
/// ```
/// use prism_core::{Color, ColorMode, SessionConfig, StyledLine};
///
/// let line = StyledLine::new("Dim YELLOW text on BLUE background")
///     .dim()
///     .fore(Color::Yellow)
///     .back(Color::Blue);
///
/// let config = SessionConfig::default().with_color(ColorMode::Never);
/// assert_eq!(line.render(&config), "Dim YELLOW text on BLUE background");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    tokens: Vec<Token>,
    text: String,
}

impl StyledLine {
    /// A line with no tokens yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            tokens: Vec::new(),
            text: text.into(),
        }
    }

    /// Append a token.
    pub fn with(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    pub fn fore(self, color: Color) -> Self {
        self.with(Token::Fore(color))
    }

    pub fn back(self, color: Color) -> Self {
        self.with(Token::Back(color))
    }

    pub fn bright(self) -> Self {
        self.with(Token::Bright)
    }

    pub fn dim(self) -> Self {
        self.with(Token::Dim)
    }

    /// Clear whatever style is still active before this line's own tokens.
    pub fn reset(self) -> Self {
        self.with(Token::Reset)
    }

    /// Tokens in the order they were added.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The literal text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the line carries a reset, and the tokens after the last one.
    pub(crate) fn split_reset(&self) -> (bool, &[Token]) {
        match self.tokens.iter().rposition(|t| *t == Token::Reset) {
            Some(i) => (true, &self.tokens[i + 1..]),
            None => (false, &self.tokens[..]),
        }
    }

    /// Render to the exact string written to the terminal (without newline).
    pub fn render(&self, config: &SessionConfig) -> String {
        if !config.color.is_enabled() || self.tokens.is_empty() {
            return self.text.clone();
        }

        let (reset, active) = self.split_reset();
        let mut out = String::new();
        if reset {
            out.push_str(RESET);
        }
        if active.is_empty() {
            out.push_str(&self.text);
            return out;
        }

        let rendered = compose(active).style(&self.text).to_string();
        if config.autoreset {
            out.push_str(&rendered);
            return out;
        }

        // owo-colors always closes a non-plain style; without auto-revert the
        // style is left open for whatever is written next.
        out.push_str(rendered.strip_suffix(RESET).unwrap_or(rendered.as_str()));
        out
    }
}

//! Style tokens: the building blocks of a styled line.
//!
//! A token is one styling directive (a foreground color, a background color,
//! an intensity change, or a reset). Tokens compose by concatenation: each
//! one is folded into an [`owo_colors::Style`] in the order it was added.

use owo_colors::Style;
use serde::Serialize;

/// The eight basic ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Apply this color as the foreground of `style`.
    fn fore(self, style: Style) -> Style {
        match self {
            Self::Black => style.black(),
            Self::Red => style.red(),
            Self::Green => style.green(),
            Self::Yellow => style.yellow(),
            Self::Blue => style.blue(),
            Self::Magenta => style.magenta(),
            Self::Cyan => style.cyan(),
            Self::White => style.white(),
        }
    }

    /// Apply this color as the background of `style`.
    fn back(self, style: Style) -> Style {
        match self {
            Self::Black => style.on_black(),
            Self::Red => style.on_red(),
            Self::Green => style.on_green(),
            Self::Yellow => style.on_yellow(),
            Self::Blue => style.on_blue(),
            Self::Magenta => style.on_magenta(),
            Self::Cyan => style.on_cyan(),
            Self::White => style.on_white(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

/// A single styling directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Foreground (text) color.
    Fore(Color),
    /// Background fill color.
    Back(Color),
    /// Bright/bold intensity.
    Bright,
    /// Dim intensity.
    Dim,
    /// Clear every style set before it.
    Reset,
}

impl Token {
    /// Fold this token into `style`.
    pub fn apply(self, style: Style) -> Style {
        match self {
            Self::Fore(color) => color.fore(style),
            Self::Back(color) => color.back(style),
            Self::Bright => style.bold(),
            Self::Dim => style.dimmed(),
            Self::Reset => Style::new(),
        }
    }
}

/// Fold a token sequence into one style, left to right.
pub fn compose(tokens: &[Token]) -> Style {
    tokens
        .iter()
        .fold(Style::new(), |style, token| token.apply(style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_compose_to_plain_style() {
        assert_eq!(format!("{}", compose(&[]).style("x")), "x");
    }

    #[test]
    fn test_each_token_changes_style() {
        for token in [
            Token::Fore(Color::Red),
            Token::Back(Color::Cyan),
            Token::Bright,
            Token::Dim,
        ] {
            let rendered = format!("{}", compose(&[token]).style("x"));
            assert_ne!(rendered, "x", "{:?} left style plain", token);
        }
    }

    #[test]
    fn test_foreground_and_background_differ() {
        let fore = format!("{}", compose(&[Token::Fore(Color::Red)]).style("x"));
        let back = format!("{}", compose(&[Token::Back(Color::Red)]).style("x"));
        assert_ne!(fore, back);
    }

    #[test]
    fn test_reset_discards_earlier_tokens() {
        let after_reset = compose(&[Token::Fore(Color::Red), Token::Reset, Token::Dim]);
        let dim_only = compose(&[Token::Dim]);
        assert_eq!(
            format!("{}", after_reset.style("x")),
            format!("{}", dim_only.style("x"))
        );
        assert_eq!(format!("{}", compose(&[Token::Bright, Token::Reset]).style("x")), "x");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(Color::White.to_string(), "white");
    }
}

//! Status labels: map a category string to a color and a fixed-width label.
//!
//! | Key | Color | Label |
//! |-----|-------|-------|
//! | `info` | Blue | `[INFO]   ` |
//! | `success` | Green | `[SUCCESS]` |
//! | `warning` | Yellow | `[WARNING]` |
//! | `error` | Red | `[ERROR]  ` |
//! | anything else | White | `[OTHER]  ` |
//!
//! Keys match exactly (case-sensitive). Unknown keys never fail; they select
//! the `Other` entry.

use serde::Serialize;

use crate::line::StyledLine;
use crate::token::Color;

/// Status category of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Info,
    Success,
    Warning,
    Error,
    /// Fallback for every unrecognized key.
    Other,
}

/// One row of the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// The category this row describes.
    pub category: StatusCategory,
    /// Key that selects this row; `None` for the fallback row.
    pub key: Option<&'static str>,
    /// Foreground color of the whole line.
    pub color: Color,
    /// Fixed-width bracketed label (9 columns).
    pub label: &'static str,
}

/// Status rows in lookup order. The last row is the fallback.
pub static STATUS_TABLE: [StatusEntry; 5] = [
    StatusEntry {
        category: StatusCategory::Info,
        key: Some("info"),
        color: Color::Blue,
        label: "[INFO]   ",
    },
    StatusEntry {
        category: StatusCategory::Success,
        key: Some("success"),
        color: Color::Green,
        label: "[SUCCESS]",
    },
    StatusEntry {
        category: StatusCategory::Warning,
        key: Some("warning"),
        color: Color::Yellow,
        label: "[WARNING]",
    },
    StatusEntry {
        category: StatusCategory::Error,
        key: Some("error"),
        color: Color::Red,
        label: "[ERROR]  ",
    },
    DEFAULT_ENTRY,
];

const DEFAULT_ENTRY: StatusEntry = StatusEntry {
    category: StatusCategory::Other,
    key: None,
    color: Color::White,
    label: "[OTHER]  ",
};

/// All status rows, fallback last.
pub fn status_table() -> &'static [StatusEntry] {
    &STATUS_TABLE
}

impl StatusCategory {
    /// Resolve a category key. Unknown keys resolve to [`StatusCategory::Other`].
    pub fn parse(key: &str) -> Self {
        STATUS_TABLE
            .iter()
            .find(|entry| entry.key == Some(key))
            .map_or(StatusCategory::Other, |entry| entry.category)
    }

    /// The table row for this category.
    pub fn entry(self) -> &'static StatusEntry {
        STATUS_TABLE
            .iter()
            .find(|entry| entry.category == self)
            .unwrap_or(&STATUS_TABLE[STATUS_TABLE.len() - 1])
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Build the styled status line for `message` under the category `key`.
///
/// # Example
///
/// ```
/// use prism_core::{status_line, ColorMode, SessionConfig};
///
/// let config = SessionConfig::default().with_color(ColorMode::Never);
/// assert_eq!(
///     status_line("Disk space is getting low.", "warning").render(&config),
///     "[WARNING] Disk space is getting low."
/// );
/// ```
pub fn status_line(message: &str, key: &str) -> StyledLine {
    let entry = StatusCategory::parse(key).entry();
    StyledLine::new(format!("{} {}", entry.label, message))
        .bright()
        .fore(entry.color)
}

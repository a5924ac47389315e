//! # CLI UI Module
//!
//! Styling for the CLI's own messages and its tabular output. The demo itself
//! renders through `prism_core`.
//!
//! ## Module Structure
//!
//! - `style`: diagnostic prefixes and error formatting
//! - `table`: status category table with comfy-table

pub mod style;
pub mod table;

pub use style::{MessageType, Style};

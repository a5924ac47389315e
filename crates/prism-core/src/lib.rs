//! # prism-core
//!
//! **Prism** – console styling demo library.
//!
//! Composes foreground, background and intensity tokens with literal text and
//! writes the result to any [`std::io::Write`]. Consumed by the `prism` CLI.
//!
//! ## Main Types
//!
//! - [`Demo`] – the four-phase demo driver
//! - [`Console`] – a writer bound to a [`SessionConfig`]
//! - [`StyledLine`] – tokens plus text
//! - [`PrismError`] – error type
//!
//! ## Modules
//!
//! - [`token`] – colors and style tokens
//! - [`line`] – styled lines and rendering
//! - [`session`] – color mode, auto-revert, console writer
//! - [`status`] – status category table
//! - [`demo`] – demo driver and input sources
//! - [`errors`] – error types
//!
//! ## Example
//!
//! ```
//! use prism_core::{ColorMode, Demo, NoWait, SessionConfig};
//!
//! let config = SessionConfig::default().with_color(ColorMode::Never);
//! let mut demo = Demo::new(config, Vec::new(), NoWait);
//! demo.run()?;
//!
//! let out = String::from_utf8(demo.into_writer()?).unwrap();
//! assert!(out.contains("[SUCCESS] Data loaded successfully."));
//! # Ok::<(), prism_core::PrismError>(())
//! ```

pub mod demo;
pub mod errors;
pub mod line;
pub mod session;
pub mod status;
pub mod token;

pub use demo::{Demo, InputSource, LineReader, NoWait};
pub use errors::{PrismError, Result};
pub use line::StyledLine;
pub use session::{ColorMode, Console, SessionConfig};
pub use status::{status_line, status_table, StatusCategory, StatusEntry};
pub use token::{Color, Token};

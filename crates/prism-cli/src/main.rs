//! # prism CLI
//!
//! Command-line interface for the Prism console styling demo.
//!
//! This binary runs the demo from `prism-core` and exposes its phases and the
//! status table as subcommands. Run `prism --help` for usage information.

mod cli;
pub mod ui;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}

//! CLI definition and command dispatch for Prism.
//!
//! This module defines the command-line interface using `clap` and provides
//! the `run()` function that dispatches commands to `prism_core`.
//!
//! ## Configuration Precedence
//!
//! Configuration is resolved with the following precedence (highest to lowest):
//! 1. CLI flags (e.g., `--color`, `--verbose`)
//! 2. Environment variables (`PRISM_COLOR`, `PRISM_VERBOSE`, `PRISM_NO_AUTORESET`)
//! 3. Built-in defaults (`SessionConfig::default()`)

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use prism_core::{
    status_table, ColorMode, Console, Demo, InputSource, LineReader, NoWait, PrismError,
    SessionConfig,
};

use crate::ui::{table, MessageType, Style};

// ============================================================================
// CLI Definition
// ============================================================================

/// Version string including git commit hash
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Prism – colored and styled terminal output demo
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true, env = "PRISM_VERBOSE")]
    pub verbose: bool,

    /// Color output mode: always or never (default: always)
    #[arg(long, global = true, env = "PRISM_COLOR", default_value = "always")]
    pub color: String,

    /// Keep styles active across lines instead of resetting after each one
    #[arg(long, global = true, env = "PRISM_NO_AUTORESET")]
    pub no_autoreset: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full demo (default)
    #[command(after_help = r#"EXAMPLES:
    # Full demo, waits for Enter at the end
    prism demo

    # Non-interactive run
    prism demo --no-wait
"#)]
    Demo {
        /// Exit right after the closing prompt instead of waiting for Enter
        #[arg(long)]
        no_wait: bool,
    },

    /// Show the basic color phase only
    Basic,

    /// Show the combined style phase only
    Combined,

    /// Print one status line
    #[command(after_help = r#"EXAMPLES:
    # Info line (default type)
    prism status "Program started."

    # Warning line
    prism status "Disk space is getting low." --type warning

    # Unknown types fall back to [OTHER]
    prism status "This is a custom type." -t custom
"#)]
    Status {
        /// Message text
        message: String,

        /// Status type: info, success, warning, error (anything else is "other")
        #[arg(short = 't', long = "type", default_value = "info")]
        category: String,
    },

    /// List status categories with their colors and labels
    Categories {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Command Dispatch
// ============================================================================

/// Parse arguments, set up logging and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only command output.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = format!("prism_core={},prism_cli={}", log_level, log_level);

    tracing_subscriber::fmt()
        .with_env_filter(&filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let color_mode = match cli.color.parse::<ColorMode>() {
        Ok(mode) => mode,
        Err(e) => {
            let style = Style::new(ColorMode::Never);
            eprintln!(
                "{}",
                style.error_with_context(&e.to_string(), None, Some("Valid options: always, never"))
            );
            return ExitCode::FAILURE;
        }
    };
    let style = Style::new(color_mode);

    if cli.no_autoreset && !color_mode.is_enabled() {
        eprintln!(
            "{}",
            style.message(MessageType::Warn, "--no-autoreset has no effect with --color never")
        );
    }

    let config = SessionConfig::default()
        .with_color(color_mode)
        .with_autoreset(!cli.no_autoreset);
    debug!(?config, "session config resolved");

    let command = cli.command.unwrap_or(Command::Demo { no_wait: false });

    match dispatch(command, config, &style) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let cause = e.chain().nth(1).map(|c| c.to_string());
            let hint = hint_for(&e);
            eprintln!(
                "{}",
                style.error_with_context(&e.to_string(), cause.as_deref(), hint)
            );
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command, config: SessionConfig, style: &Style) -> anyhow::Result<()> {
    let stdout = io::stdout().lock();

    match command {
        Command::Demo { no_wait } => {
            if no_wait {
                run_demo(config, stdout, NoWait)
            } else {
                run_demo(config, stdout, LineReader::new(io::stdin().lock()))
            }
        }
        Command::Basic => {
            let mut demo = Demo::new(config, stdout, NoWait);
            demo.basic_colors().context("Failed to print basic color demo")?;
            demo.into_writer().context("Failed to flush output")?;
            Ok(())
        }
        Command::Combined => {
            let mut demo = Demo::new(config, stdout, NoWait);
            demo.combined_colors()
                .context("Failed to print combined color demo")?;
            demo.into_writer().context("Failed to flush output")?;
            Ok(())
        }
        Command::Status { message, category } => {
            let mut console = Console::new(config, stdout);
            console
                .status(&message, &category)
                .context("Failed to print status line")?;
            console
                .end_session()
                .context("Failed to reset terminal styles")?;
            console.flush().context("Failed to flush output")?;
            Ok(())
        }
        Command::Categories { json } => handle_categories(stdout, style, json),
    }
}

fn run_demo<W: Write, I: InputSource>(
    config: SessionConfig,
    out: W,
    input: I,
) -> anyhow::Result<()> {
    let mut demo = Demo::new(config, out, input);
    demo.run().context("Demo aborted")?;
    Ok(())
}

fn handle_categories<W: Write>(mut out: W, style: &Style, json: bool) -> anyhow::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(status_table())
            .context("Failed to serialize status table")?;
        writeln!(out, "{}", rendered).context("Failed to write output")?;
    } else {
        writeln!(out, "{}", style.section("STATUS CATEGORIES")).context("Failed to write output")?;
        writeln!(out).context("Failed to write output")?;
        writeln!(out, "{}", table::render_categories_table(status_table()))
            .context("Failed to write output")?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Suggest a fix for errors the user can act on.
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<PrismError>() {
        Some(PrismError::Output(_)) => Some("Check that the process reading stdout is still running"),
        Some(PrismError::Input(_)) => Some("Use `prism demo --no-wait` for non-interactive runs"),
        _ => None,
    }
}

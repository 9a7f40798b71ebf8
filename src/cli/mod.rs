//! cli
//!
//! Command-line interface layer for Ve-Shop.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT touch persistence directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that work through the [`crate::session`] and [`crate::store`]
//! contracts.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

use crate::session::Context;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        state_dir: cli.state_dir.clone(),
        quiet: cli.quiet,
        debug: cli.debug,
    };

    commands::dispatch(cli.command, &ctx)
}

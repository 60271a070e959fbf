//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `workspace-gen` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the action context and the parsed
//!   `Args` and performs the command's logic.
//!
//! Commands call into the `workspace_gen` library's action layer and report
//! the returned status string to the user; the exit code reflects the
//! action's success flag.

pub mod bootstrap;
pub mod editor;
pub mod workspace;

use anyhow::Result;
use console::style;
use workspace_gen::actions::Outcome;

/// Print an action outcome and convert it into the command's exit status.
pub(crate) fn report(outcome: Outcome) -> Result<()> {
    if outcome.success {
        println!("{} {}", style("✓").green(), outcome.message);
        Ok(())
    } else {
        Err(anyhow::anyhow!(outcome.message))
    }
}

//! # Editor Command Implementation
//!
//! Registers or unregisters a workspace directory in VS Code's
//! `eslint.workingDirectories` setting. Entries are normalized to the
//! canonical `./` form, so `workspace-gen editor add shared` and
//! `workspace-gen editor add ./shared` are the same registration.

use anyhow::Result;
use clap::{Args, Subcommand};

use workspace_gen::actions::{self, ActionConfig, Context};

use crate::commands::report;

/// Manage eslint working directories in .vscode/settings.json
#[derive(Args, Debug)]
pub struct EditorArgs {
    #[command(subcommand)]
    command: EditorCommand,
}

#[derive(Subcommand, Debug)]
enum EditorCommand {
    /// Add a workspace directory
    Add {
        /// The directory to register (a leading `./` is implied)
        workspace: String,
    },
    /// Remove a workspace directory
    Remove {
        /// The directory to unregister
        workspace: String,
    },
}

/// Execute the `editor` command.
pub fn execute(ctx: &Context, args: EditorArgs) -> Result<()> {
    let (id, workspace) = match args.command {
        EditorCommand::Add { workspace } => (actions::ADD_ESLINT_WORKING_DIRECTORY, workspace),
        EditorCommand::Remove { workspace } => {
            (actions::DELETE_ESLINT_WORKING_DIRECTORY, workspace)
        }
    };
    let config = ActionConfig {
        workspace: Some(workspace),
        ..Default::default()
    };
    report(actions::run(id, ctx, &config, None))
}

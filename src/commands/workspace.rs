//! # Workspace Command Implementation
//!
//! Registers or unregisters a workspace glob in the monorepo's
//! `pnpm-workspace.yaml`. Both directions are idempotent: adding a glob
//! twice or removing an absent glob succeeds without changing membership.

use anyhow::Result;
use clap::{Args, Subcommand};

use workspace_gen::actions::{self, ActionConfig, Context};

use crate::commands::report;

/// Manage workspace globs in pnpm-workspace.yaml
#[derive(Args, Debug)]
pub struct WorkspaceArgs {
    #[command(subcommand)]
    command: WorkspaceCommand,
}

#[derive(Subcommand, Debug)]
enum WorkspaceCommand {
    /// Add a workspace glob (e.g. `pkg/widgets` or `pkg/*`)
    Add {
        /// The workspace glob to register
        workspace: String,
    },
    /// Remove a workspace glob
    Remove {
        /// The workspace glob to unregister
        workspace: String,
    },
}

/// Execute the `workspace` command.
pub fn execute(ctx: &Context, args: WorkspaceArgs) -> Result<()> {
    let (id, workspace) = match args.command {
        WorkspaceCommand::Add { workspace } => (actions::ADD_PNPM_WORKSPACE, workspace),
        WorkspaceCommand::Remove { workspace } => (actions::DELETE_PNPM_WORKSPACE, workspace),
    };
    let config = ActionConfig {
        workspace: Some(workspace),
        ..Default::default()
    };
    report(actions::run(id, ctx, &config, None))
}

//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use workspace_gen::actions::Context;

use crate::commands;

/// Workspace Generator - scaffold and register monorepo package workspaces
#[derive(Parser, Debug)]
#[command(name = "workspace-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Monorepo root directory
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register or unregister workspace globs in pnpm-workspace.yaml
    Workspace(commands::workspace::WorkspaceArgs),
    /// Register or unregister eslint working directories in VS Code settings
    Editor(commands::editor::EditorArgs),
    /// Rewrite package.json descriptors for a new or existing workspace
    Bootstrap(commands::bootstrap::BootstrapArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .try_init()
        .ok();

        // The root is resolved once here and threaded through every
        // operation; nothing downstream recomputes it.
        let ctx = Context::new(&self.root);

        match self.command {
            Commands::Workspace(args) => commands::workspace::execute(&ctx, args),
            Commands::Editor(args) => commands::editor::execute(&ctx, args),
            Commands::Bootstrap(args) => commands::bootstrap::execute(&ctx, args),
        }
    }
}

//! # Registration Actions
//!
//! The operations exposed to the prompt/CLI front-end. Each action follows
//! the same shape: load a manifest, mutate one field (set registration or
//! descriptor reconciliation), write it back. Actions are registered under
//! stable string identifiers and return an [`Outcome`] whose message is the
//! short human-readable status string that forms the whole result contract
//! with the caller.
//!
//! Every action wraps its pipeline in a single recover block: a failure at
//! any stage is logged and converted into a failure `Outcome`. Since the
//! write is the last step, a failure before it never touches disk. Actions
//! are independently idempotent; running one twice yields the same file.
//!
//! ## Structure
//!
//! Each operation lives in its own module:
//! - `workspace` — pnpm workspace registration (`pnpm-workspace.yaml`).
//! - `editor` — eslint working-directory registration
//!   (`.vscode/settings.json`).
//! - `bootstrap` — package.json descriptor reconciliation.

pub mod bootstrap;
pub mod editor;
pub mod workspace;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::style::Style;

pub use bootstrap::BootstrapAnswers;

/// Stable identifier: add a workspace glob to `pnpm-workspace.yaml`.
pub const ADD_PNPM_WORKSPACE: &str = "add-pnpm-workspace";
/// Stable identifier: remove a workspace glob from `pnpm-workspace.yaml`.
pub const DELETE_PNPM_WORKSPACE: &str = "delete-pnpm-workspace";
/// Stable identifier: add a directory to `eslint.workingDirectories`.
pub const ADD_ESLINT_WORKING_DIRECTORY: &str = "add-eslint-working-directory";
/// Stable identifier: remove a directory from `eslint.workingDirectories`.
pub const DELETE_ESLINT_WORKING_DIRECTORY: &str = "delete-eslint-working-directory";
/// Stable identifier: reconcile package descriptor documents.
pub const BOOTSTRAP_PACKAGE_JSON: &str = "bootstrap-package-json";

/// Per-invocation context, resolved once by the front-end and threaded
/// through every operation. The monorepo root is an explicit value here,
/// never recomputed ad hoc.
#[derive(Debug, Clone)]
pub struct Context {
    /// Monorepo root; all manifest paths are resolved against it.
    pub root: PathBuf,
    /// Style configuration discovered at the root, if any.
    pub style: Option<Style>,
}

impl Context {
    /// Build a context for a monorepo root, discovering its style
    /// configuration.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let style = Style::discover(&root);
        Self { root, style }
    }
}

/// Result of running an action: a success flag for the caller's exit code,
/// and the status string that is the only detail exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        let message = message.into();
        log::info!("{}", message);
        Self {
            success: true,
            message,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        log::error!("{}", message);
        Self {
            success: false,
            message,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Static per-invocation configuration supplied by the front-end alongside
/// the answer set.
#[derive(Debug, Clone, Default)]
pub struct ActionConfig {
    /// Workspace glob or directory the action operates on.
    pub workspace: Option<String>,
    /// Template file a scaffolded package.json is loaded from.
    pub template_file: Option<PathBuf>,
}

/// Dispatch an action by its stable identifier.
///
/// `answers` is only consulted by `bootstrap-package-json`. An unknown
/// identifier or missing configuration is a failure `Outcome`, not a panic.
pub fn run(
    id: &str,
    ctx: &Context,
    config: &ActionConfig,
    answers: Option<&BootstrapAnswers>,
) -> Outcome {
    let workspace = config.workspace.as_deref();
    match id {
        ADD_PNPM_WORKSPACE => match workspace {
            Some(ws) => workspace::add(ctx, ws),
            None => missing_config(id, "workspace"),
        },
        DELETE_PNPM_WORKSPACE => match workspace {
            Some(ws) => workspace::delete(ctx, ws),
            None => missing_config(id, "workspace"),
        },
        ADD_ESLINT_WORKING_DIRECTORY => match workspace {
            Some(ws) => editor::add(ctx, ws),
            None => missing_config(id, "workspace"),
        },
        DELETE_ESLINT_WORKING_DIRECTORY => match workspace {
            Some(ws) => editor::delete(ctx, ws),
            None => missing_config(id, "workspace"),
        },
        BOOTSTRAP_PACKAGE_JSON => match answers {
            Some(answers) => bootstrap::run(ctx, answers, config.template_file.as_deref()),
            None => missing_config(id, "answers"),
        },
        _ => Outcome::failure(format!("Unknown action '{}'", id)),
    }
}

fn missing_config(id: &str, field: &str) -> Outcome {
    Outcome::failure(format!("Action '{}' requires '{}'", id, field))
}

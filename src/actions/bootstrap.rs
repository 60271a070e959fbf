//! Package descriptor bootstrap.
//!
//! Reconciles one or two `package.json` documents against the answer set
//! collected by the front-end: always the child workspace package, and in
//! init mode the monorepo root package as well. Each document is reconciled
//! against its own update; the root's repository URL is never written into
//! the child.
//!
//! The child document can be seeded from a template file (the template is
//! read-only; output always goes to the workspace destination), from an
//! existing destination file, or from scratch when neither exists.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::actions::{Context, Outcome};
use crate::descriptor::{reconcile, DescriptorUpdate};
use crate::error::Result;
use crate::manifest::{Manifest, ManifestFormat};

/// Answer set for the bootstrap operation, collected by the prompt layer.
#[derive(Debug, Clone, Default)]
pub struct BootstrapAnswers {
    /// Rewrite the monorepo root package.json as well.
    pub init: bool,
    /// Child package directory relative to the root (e.g. `pkg/widgets`).
    /// Empty means the root package itself is the child.
    pub workspace: String,
    /// Target state for the root descriptor (init mode only).
    pub root: DescriptorUpdate,
    /// Target state for the child descriptor.
    pub child: DescriptorUpdate,
}

/// Run the bootstrap operation, returning its status string.
pub fn run(ctx: &Context, answers: &BootstrapAnswers, template: Option<&Path>) -> Outcome {
    match try_run(ctx, answers, template) {
        Ok(()) => Outcome::success("Bootstrapped package.json"),
        Err(err) => Outcome::failure(format!("Failed to bootstrap package.json: {}", err)),
    }
}

fn try_run(ctx: &Context, answers: &BootstrapAnswers, template: Option<&Path>) -> Result<()> {
    if answers.init {
        let root_path = ctx.root.join("package.json");
        let mut manifest = Manifest::load(&root_path, ManifestFormat::Json)?;
        reconcile(&mut manifest, &answers.root)?;
        manifest.save(ctx.style.as_ref())?;
    }

    let dest = child_dest(ctx, &answers.workspace);
    let mut manifest = match template {
        Some(template) => Manifest::load(template, ManifestFormat::Json)?,
        None if dest.exists() => Manifest::load(&dest, ManifestFormat::Json)?,
        None => Manifest::from_value(&dest, ManifestFormat::Json, json!({})),
    };
    reconcile(&mut manifest, &answers.child)?;
    manifest.save_to(&dest, ctx.style.as_ref())
}

fn child_dest(ctx: &Context, workspace: &str) -> PathBuf {
    if workspace.is_empty() {
        ctx.root.join("package.json")
    } else {
        ctx.root.join(workspace).join("package.json")
    }
}

//! Workspace registration in the pnpm workspace manifest.
//!
//! `pnpm-workspace.yaml` holds one top-level `packages` key with a sequence
//! of workspace globs, treated as a set. Registration is idempotent: adding
//! a glob that is already present succeeds without changing the file's
//! membership.

use crate::actions::{Context, Outcome};
use crate::error::Result;
use crate::manifest::{Manifest, ManifestFormat};
use crate::set_field::SetField;

/// File name of the pnpm workspace manifest, relative to the root.
pub const WORKSPACE_MANIFEST: &str = "pnpm-workspace.yaml";
/// The set field holding workspace globs.
const PACKAGES_FIELD: &str = "packages";

/// Add a workspace glob to `pnpm-workspace.yaml`.
pub fn add(ctx: &Context, workspace: &str) -> Outcome {
    match mutate(ctx, workspace, Mode::Add) {
        Ok(true) => Outcome::success(format!(
            "Package '{}' added to {}",
            workspace, WORKSPACE_MANIFEST
        )),
        Ok(false) => Outcome::success(format!(
            "Package '{}' already registered in {}",
            workspace, WORKSPACE_MANIFEST
        )),
        Err(err) => Outcome::failure(format!(
            "Error adding '{}' to {}: {}",
            workspace, WORKSPACE_MANIFEST, err
        )),
    }
}

/// Remove a workspace glob from `pnpm-workspace.yaml`. Removing an absent
/// glob is a no-op, not an error.
pub fn delete(ctx: &Context, workspace: &str) -> Outcome {
    match mutate(ctx, workspace, Mode::Delete) {
        Ok(_) => Outcome::success(format!(
            "Package '{}' deleted from {}",
            workspace, WORKSPACE_MANIFEST
        )),
        Err(err) => Outcome::failure(format!(
            "Error deleting '{}' from {}: {}",
            workspace, WORKSPACE_MANIFEST, err
        )),
    }
}

/// Currently registered workspace globs. Used by the bootstrap front-end to
/// detect a not-yet-initialized monorepo.
pub fn registered(ctx: &Context) -> Result<Vec<String>> {
    let manifest = Manifest::load(ctx.root.join(WORKSPACE_MANIFEST), ManifestFormat::Yaml)?;
    SetField::new(PACKAGES_FIELD).entries(&manifest)
}

enum Mode {
    Add,
    Delete,
}

fn mutate(ctx: &Context, workspace: &str, mode: Mode) -> Result<bool> {
    let path = ctx.root.join(WORKSPACE_MANIFEST);
    let mut manifest = Manifest::load(&path, ManifestFormat::Yaml)?;
    let field = SetField::new(PACKAGES_FIELD);
    let changed = match mode {
        Mode::Add => field.add(&mut manifest, workspace)?,
        Mode::Delete => field.delete(&mut manifest, workspace)?,
    };
    manifest.save(ctx.style.as_ref())?;
    Ok(changed)
}

//! Editor working-directory registration.
//!
//! VS Code's `.vscode/settings.json` carries an `eslint.workingDirectories`
//! key listing the directories eslint should treat as project roots. The
//! entries are relative directory paths, normalized to the canonical `./`
//! form so that `shared` and `./shared` are one registration.

use crate::actions::{Context, Outcome};
use crate::error::Result;
use crate::manifest::{Manifest, ManifestFormat};
use crate::set_field::{normalize_dir_entry, SetField};

/// Settings file path relative to the root.
pub const SETTINGS_FILE: &str = ".vscode/settings.json";
/// The set field holding eslint working directories.
const WORKING_DIRECTORIES_FIELD: &str = "eslint.workingDirectories";

/// Add a workspace directory to `eslint.workingDirectories`.
pub fn add(ctx: &Context, workspace: &str) -> Outcome {
    let entry = normalize_dir_entry(workspace);
    match mutate(ctx, &entry, Mode::Add) {
        Ok(_) => Outcome::success(format!("Added '{}' to settings.json", entry)),
        Err(err) => Outcome::failure(format!("Error modifying settings.json: {}", err)),
    }
}

/// Remove a workspace directory from `eslint.workingDirectories`.
pub fn delete(ctx: &Context, workspace: &str) -> Outcome {
    let entry = normalize_dir_entry(workspace);
    match mutate(ctx, &entry, Mode::Delete) {
        Ok(_) => Outcome::success(format!("Deleted '{}' from settings.json", entry)),
        Err(err) => Outcome::failure(format!("Error modifying settings.json: {}", err)),
    }
}

enum Mode {
    Add,
    Delete,
}

fn mutate(ctx: &Context, entry: &str, mode: Mode) -> Result<bool> {
    let path = ctx.root.join(SETTINGS_FILE);
    let mut manifest = Manifest::load(&path, ManifestFormat::Json)?;
    let field = SetField::dirs(WORKING_DIRECTORIES_FIELD);
    let changed = match mode {
        Mode::Add => field.add(&mut manifest, entry)?,
        Mode::Delete => field.delete(&mut manifest, entry)?,
    };
    manifest.save(ctx.style.as_ref())?;
    Ok(changed)
}

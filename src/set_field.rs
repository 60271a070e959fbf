//! # Set-Based Field Mutation
//!
//! The core guarantee of every registration operation: a manifest field
//! holding a sequence of strings is treated as a set, so re-running an
//! operation never duplicates an entry. Insertion order of surviving
//! entries is preserved for file readability, but only membership is part
//! of the contract.
//!
//! Fields registering relative directory paths (editor working
//! directories) are normalized to a canonical leading-`./` form before
//! comparison, so `shared` and `./shared` are the same entry.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::manifest::Manifest;

/// A named manifest field treated as a set of strings.
#[derive(Debug, Clone)]
pub struct SetField {
    name: String,
    normalize: bool,
}

/// Enforce the canonical leading `./` form for a relative directory entry.
pub fn normalize_dir_entry(entry: &str) -> String {
    if entry.starts_with("./") {
        entry.to_string()
    } else {
        format!("./{}", entry)
    }
}

impl SetField {
    /// A set field whose entries are stored verbatim (e.g. workspace globs).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            normalize: false,
        }
    }

    /// A set field whose entries are relative directory paths, normalized
    /// to the canonical `./` form.
    pub fn dirs(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            normalize: true,
        }
    }

    /// Field name this mutator operates on.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn canonical(&self, entry: &str) -> String {
        if self.normalize {
            normalize_dir_entry(entry)
        } else {
            entry.to_string()
        }
    }

    /// Read the field's current entries in canonical form, duplicates
    /// removed, insertion order preserved. A missing field is an empty set.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the field exists but is not a sequence of
    /// strings.
    pub fn entries(&self, manifest: &Manifest) -> Result<Vec<String>> {
        let field = match manifest.data.get(&self.name) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(value) => value,
        };
        let items = field.as_array().ok_or_else(|| self.shape_error(manifest))?;

        let mut entries: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            let entry = item.as_str().ok_or_else(|| self.shape_error(manifest))?;
            let entry = self.canonical(entry);
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Whether `entry` is a member of the set (after normalization).
    pub fn contains(&self, manifest: &Manifest, entry: &str) -> Result<bool> {
        let entry = self.canonical(entry);
        Ok(self.entries(manifest)?.contains(&entry))
    }

    /// Insert `entry` into the set. Returns `true` if it was newly added,
    /// `false` if it was already present. The field is rewritten from the
    /// set either way, which also scrubs pre-existing duplicates.
    pub fn add(&self, manifest: &mut Manifest, entry: &str) -> Result<bool> {
        let entry = self.canonical(entry);
        let mut entries = self.entries(manifest)?;
        let inserted = if entries.contains(&entry) {
            false
        } else {
            entries.push(entry);
            true
        };
        self.write_back(manifest, entries);
        Ok(inserted)
    }

    /// Remove `entry` from the set. Returns `true` if it was present; a
    /// missing entry is a no-op, not an error.
    pub fn delete(&self, manifest: &mut Manifest, entry: &str) -> Result<bool> {
        let entry = self.canonical(entry);
        let mut entries = self.entries(manifest)?;
        let before = entries.len();
        entries.retain(|e| e != &entry);
        let removed = entries.len() != before;
        self.write_back(manifest, entries);
        Ok(removed)
    }

    fn write_back(&self, manifest: &mut Manifest, entries: Vec<String>) {
        // An empty document (e.g. an empty YAML file) parses to null; give
        // it an object root so the field can be set.
        if manifest.data.is_null() {
            manifest.data = Value::Object(serde_json::Map::new());
        }
        let sequence = Value::Array(entries.into_iter().map(Value::String).collect());
        manifest.data[&self.name] = sequence;
    }

    fn shape_error(&self, manifest: &Manifest) -> Error {
        Error::Parse {
            path: manifest.path.display().to_string(),
            message: format!("field '{}' is not a sequence of strings", self.name),
        }
    }
}

//! # Style Discovery
//!
//! Optional formatting pass applied to serialized manifests before writing.
//! A workspace may carry a `.prettierrc` at its root; if it does, JSON
//! output is re-indented according to its `tabWidth`/`useTabs` options.
//!
//! Every path through this module is fallible-by-design: discovery returns
//! `None` when the config is missing or malformed, and `apply` returns
//! `None` when it cannot produce styled text. The sink writer always falls
//! back to its plain serialization, so formatting never affects
//! correctness.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::manifest::ManifestFormat;

/// File name probed at the workspace root.
const STYLE_FILE: &str = ".prettierrc";

/// Code-style options discovered from the workspace root.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    /// Spaces per indentation level.
    pub tab_width: usize,
    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            tab_width: 2,
            use_tabs: false,
        }
    }
}

impl Style {
    /// Look for a style configuration at the workspace root.
    ///
    /// Returns `None` when no `.prettierrc` exists or when it cannot be
    /// parsed; a broken style file must not break manifest writes.
    pub fn discover(root: &Path) -> Option<Self> {
        let path = root.join(STYLE_FILE);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(style) => Some(style),
            Err(err) => {
                warn!("Ignoring malformed {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Re-format serialized manifest text according to this style.
    ///
    /// Only JSON is restyled; YAML passes through the plain serialization.
    /// Returns `None` when styling is not applicable or fails.
    pub fn apply(&self, text: &str, format: ManifestFormat) -> Option<String> {
        match format {
            ManifestFormat::Json => self.reindent_json(text),
            ManifestFormat::Yaml => None,
        }
    }

    fn reindent_json(&self, text: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(text).ok()?;
        let indent = if self.use_tabs {
            vec![b'\t']
        } else {
            vec![b' '; self.tab_width]
        };
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer).ok()?;
        String::from_utf8(buf).ok()
    }
}

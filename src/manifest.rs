//! # Manifest Loading and Writing
//!
//! The source-loader and sink-writer halves of the mutation engine. A
//! [`Manifest`] is a structured text file (JSON or YAML) loaded fresh from
//! disk at the start of an operation, mutated in memory, written back, and
//! discarded. The file on disk is the only persisted state.
//!
//! YAML documents are bridged into `serde_json::Value` after parsing so the
//! set mutator and descriptor reconciler operate on a single in-memory
//! document type; serialization goes back out through the declared format.
//!
//! ## Example
//!
//! ```ignore
//! use workspace_gen::manifest::{Manifest, ManifestFormat};
//!
//! let mut manifest = Manifest::load("pnpm-workspace.yaml", ManifestFormat::Yaml)?;
//! // ... mutate manifest.data ...
//! manifest.save(None)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::style::Style;

/// On-disk serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// JSON, written with 2-space indentation unless a style pass overrides it.
    Json,
    /// YAML, written via `serde_yaml`'s default block style.
    Yaml,
}

/// A manifest document loaded from disk, retaining its origin path so it can
/// be written back to the same location.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the document was loaded from (and is saved back to by default).
    pub path: PathBuf,
    /// Declared serialization format.
    pub format: ManifestFormat,
    /// The parsed document.
    pub data: Value,
}

impl Manifest {
    /// Load and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the file is missing, `Error::Parse` if
    /// the content is not well-formed in the declared format.
    pub fn load(path: impl AsRef<Path>, format: ManifestFormat) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        let data = parse(&content, format).map_err(|message| Error::Parse {
            path: path.display().to_string(),
            message,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
            data,
        })
    }

    /// Build a manifest from an in-memory document, destined for `path`.
    ///
    /// Used when scaffolding a file that does not exist on disk yet.
    pub fn from_value(path: impl AsRef<Path>, format: ManifestFormat, data: Value) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
            data,
        }
    }

    /// Serialize the document to text in its declared format.
    ///
    /// JSON is rendered with 2-space indentation; YAML through `serde_yaml`.
    pub fn serialize(&self) -> Result<String> {
        match self.format {
            ManifestFormat::Json => Ok(serde_json::to_string_pretty(&self.data)?),
            ManifestFormat::Yaml => Ok(serde_yaml::to_string(&self.data)?),
        }
    }

    /// Write the document back to its origin path.
    ///
    /// See [`Manifest::save_to`].
    pub fn save(&self, style: Option<&Style>) -> Result<()> {
        let path = self.path.clone();
        self.save_to(&path, style)
    }

    /// Serialize and write the document to `dest`, overwriting it in full.
    ///
    /// If a style pass is supplied and produces output, the styled text is
    /// written; otherwise the plain serialization is used. Styling is an
    /// enhancement, never a correctness requirement. Parent directories are
    /// created as needed.
    ///
    /// # Errors
    ///
    /// Returns `Error::Write` if directory creation or the file write fails.
    pub fn save_to(&self, dest: &Path, style: Option<&Style>) -> Result<()> {
        let serialized = self.serialize()?;
        let text = style
            .and_then(|s| s.apply(&serialized, self.format))
            .unwrap_or(serialized);
        let text = ensure_trailing_newline(text);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| Error::Write {
                    path: dest.display().to_string(),
                    message: err.to_string(),
                })?;
            }
        }
        fs::write(dest, text).map_err(|err| Error::Write {
            path: dest.display().to_string(),
            message: err.to_string(),
        })
    }
}

fn parse(content: &str, format: ManifestFormat) -> std::result::Result<Value, String> {
    match format {
        ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ManifestFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            // Non-string mapping keys have no JSON counterpart and fail here.
            serde_json::to_value(yaml).map_err(|e| e.to_string())
        }
    }
}

fn ensure_trailing_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

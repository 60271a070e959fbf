//! # Workspace Generator Library
//!
//! This library provides the core functionality for the `workspace-gen`
//! command-line tool: a set of idempotent registration operations that
//! scaffold and maintain package workspaces inside a monorepo.
//!
//! ## Quick Example
//!
//! ```
//! use workspace_gen::manifest::{Manifest, ManifestFormat};
//! use workspace_gen::set_field::SetField;
//! use serde_json::json;
//!
//! // Treat a manifest field as a set of strings.
//! let mut manifest = Manifest::from_value(
//!     "pnpm-workspace.yaml",
//!     ManifestFormat::Yaml,
//!     json!({"packages": ["pkg/a"]}),
//! );
//! let packages = SetField::new("packages");
//!
//! // Adding twice registers once.
//! packages.add(&mut manifest, "pkg/b").unwrap();
//! packages.add(&mut manifest, "pkg/b").unwrap();
//! assert_eq!(packages.entries(&manifest).unwrap().len(), 2);
//! ```
//!
//! ## Core Concepts
//!
//! Every registration operation follows the same four-stage shape:
//!
//! 1. **Load** (`manifest`): read a JSON or YAML file from a known path and
//!    parse it into an in-memory document.
//! 2. **Mutate** (`set_field`): treat one field as a set of strings and add
//!    or remove an entry, guaranteeing no duplicate registration; or
//! 3. **Reconcile** (`descriptor`): overwrite-or-delete package descriptor
//!    fields from a target update, never merging with stale state.
//! 4. **Write** (`manifest` + `style`): serialize back to the original
//!    format, optionally restyled by a discovered code-style configuration,
//!    creating parent directories as needed.
//!
//! The operations themselves live in `actions`, registered under stable
//! string identifiers and returning a short human-readable status string.
//! The `repo_info` module is a read-only capability that seeds prompt
//! defaults from git/GitHub metadata; it never feeds the mutation engine.
//!
//! Documents are ephemeral: loaded fresh per operation, mutated in memory,
//! written back, discarded. The file on disk is the sole persisted state.
//! There is no file locking; concurrent writers to the same file are out of
//! scope for this single-user, interactive tool.

pub mod actions;
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod repo_info;
pub mod set_field;
pub mod style;

#[cfg(test)]
mod set_field_proptest;

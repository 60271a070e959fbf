//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for
//! `workspace-gen`. It uses the `thiserror` library to create a single
//! `Error` enum that covers all anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! The variants cover:
//!
//! - Missing manifest files.
//! - Malformed JSON/YAML content.
//! - Ambiguous document shapes during descriptor reconciliation.
//! - Directory creation and file write failures.
//! - Repository metadata lookup failures (git/gh subprocesses).
//! - Wrapped I/O, serialization, and semver errors.
//!
//! `AmbiguousShape` deserves a note: it marks a contract violation (setting
//! a structured sub-field on a bare-string field) and must surface to the
//! caller rather than being coerced, since coercion risks silently
//! discarding existing data.

use thiserror::Error;

/// Main error type for workspace-gen operations
#[derive(Error, Debug)]
pub enum Error {
    /// A manifest file does not exist at the expected path.
    #[error("Manifest not found: {path}")]
    NotFound { path: String },

    /// A manifest file's content is not valid JSON or YAML, or a field does
    /// not have the expected shape.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A structured sub-field write was requested on a field that is a bare
    /// string in the document, making the target ambiguous.
    #[error("Ambiguous shape for field '{field}': {message}")]
    AmbiguousShape { field: String, message: String },

    /// Directory creation or file write failed.
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    /// A repository metadata lookup (git/gh subprocess) failed.
    #[error("Repository lookup failed: {command} - {message}")]
    RemoteLookup { command: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A semantic versioning parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    Semver(#[from] semver::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

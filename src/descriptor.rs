//! # Package Descriptor Reconciliation
//!
//! Overwrite-or-delete mutation of `package.json` fields driven by a target
//! [`DescriptorUpdate`], as opposed to a free-form merge. The reconciler
//! always derives each field it controls from the update, never from
//! leftover prior state, which makes applying the same update twice produce
//! identical output.
//!
//! `author` and `repository` may appear in a document as a bare string or a
//! structured object. The reconciler reads whichever shape is present and
//! always writes the structured shape. Setting a sub-field (such as
//! `repository.url`) on a bare string is ambiguous and raises
//! [`Error::AmbiguousShape`] rather than silently discarding the string.

use semver::Version;
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::manifest::Manifest;

/// Target author state. The update is only applied when both `name` and
/// `email` are present; a partial update leaves the document's author
/// untouched rather than downgrading it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

/// Target state for a package descriptor document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorUpdate {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub author: AuthorUpdate,
    pub repository_url: Option<String>,
}

/// The two shapes a polymorphic descriptor field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape<'a> {
    Str(&'a str),
    Object(&'a Map<String, Value>),
}

/// Classify a field that may be a bare string or a structured object.
///
/// Returns `None` for a missing or null field, or for any other value type
/// (which the reconciler treats as replaceable).
pub fn field_shape<'a>(doc: &'a Value, field: &str) -> Option<FieldShape<'a>> {
    match doc.get(field) {
        Some(Value::String(s)) => Some(FieldShape::Str(s)),
        Some(Value::Object(map)) => Some(FieldShape::Object(map)),
        _ => None,
    }
}

/// Apply `update` to a package descriptor document in place.
///
/// - `name` and `version` are overwritten unconditionally; `version` must
///   be valid semver.
/// - `description` and `homepage` are set from the update when non-empty,
///   otherwise removed.
/// - `author` is rewritten in object form when the update carries both name
///   and email; otherwise left untouched.
/// - `repository` is coerced to object form around the update URL
///   (preserving an existing `type`), removed entirely when the update URL
///   is empty, and rejected as ambiguous when the document holds a bare
///   string.
///
/// # Errors
///
/// Returns `Error::Semver` for an invalid version, `Error::Parse` if the
/// document root is not an object, and `Error::AmbiguousShape` for a
/// sub-field write on a bare-string field.
pub fn reconcile(manifest: &mut Manifest, update: &DescriptorUpdate) -> Result<()> {
    Version::parse(&update.version)?;

    let path = manifest.path.display().to_string();
    let doc = manifest.data.as_object_mut().ok_or_else(|| Error::Parse {
        path,
        message: "package descriptor root is not an object".to_string(),
    })?;

    doc.insert("name".to_string(), json!(update.name));
    doc.insert("version".to_string(), json!(update.version));

    set_or_remove(doc, "description", update.description.as_deref());
    set_or_remove(doc, "homepage", update.homepage.as_deref());

    reconcile_author(doc, &update.author);
    reconcile_repository(doc, non_empty(update.repository_url.as_deref()))?;

    Ok(())
}

/// Set a plain string field from the update, or remove it when the update
/// value is empty or absent. The field is never left stale and never set to
/// an empty string.
fn set_or_remove(doc: &mut Map<String, Value>, field: &str, value: Option<&str>) {
    match non_empty(value) {
        Some(value) => {
            doc.insert(field.to_string(), json!(value));
        }
        None => {
            doc.remove(field);
        }
    }
}

fn reconcile_author(doc: &mut Map<String, Value>, author: &AuthorUpdate) {
    let (name, email) = match (
        non_empty(author.name.as_deref()),
        non_empty(author.email.as_deref()),
    ) {
        (Some(name), Some(email)) => (name, email),
        // Incomplete update: keep whatever the document has instead of
        // downgrading to partial state.
        _ => return,
    };

    // Rewrite in place when the document already has the object shape, so
    // unrecognized sub-fields survive. A bare string or missing author is
    // replaced wholesale, which is unambiguous for a complete update.
    let existing = doc
        .get_mut("author")
        .and_then(Value::as_object_mut)
        .map(std::mem::take);
    let mut object = existing.unwrap_or_default();

    object.insert("name".to_string(), json!(name));
    object.insert("email".to_string(), json!(email));
    match non_empty(author.url.as_deref()) {
        Some(url) => {
            object.insert("url".to_string(), json!(url));
        }
        None => {
            object.remove("url");
        }
    }
    doc.insert("author".to_string(), Value::Object(object));
}

fn reconcile_repository(doc: &mut Map<String, Value>, url: Option<&str>) -> Result<()> {
    let url = match url {
        Some(url) => url,
        None => {
            doc.remove("repository");
            return Ok(());
        }
    };

    match doc.get_mut("repository") {
        Some(Value::String(_)) => Err(Error::AmbiguousShape {
            field: "repository".to_string(),
            message: "cannot set 'url' on a bare string repository".to_string(),
        }),
        Some(Value::Object(object)) => {
            object.insert("url".to_string(), json!(url));
            Ok(())
        }
        _ => {
            doc.insert("repository".to_string(), json!({ "url": url }));
            Ok(())
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

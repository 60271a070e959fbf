//! Name derivation and validation helpers for the bootstrap prompts.
//!
//! Package names default to a slug of the human-readable title, and the
//! title itself defaults to the repository slug in title case. Validation
//! follows the npm registry's rules for new package names.

/// Maximum length the npm registry accepts for a package name.
const MAX_PACKAGE_NAME_LEN: usize = 214;

/// Derive a package-name slug from a human-readable title.
///
/// Lowercases, hyphenates whitespace runs, and strips characters that are
/// not alphanumeric or hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = !slug.is_empty();
        } else if ch.is_alphanumeric() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.extend(ch.to_lowercase());
        }
    }
    slug
}

/// Turn a repository slug into a display title: `my-repo` becomes `My Repo`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a package name against the npm registry's rules for new
/// packages. Returns a human-readable reason on rejection.
pub fn validate_package_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name length must be greater than zero".to_string());
    }
    if name.len() > MAX_PACKAGE_NAME_LEN {
        return Err(format!(
            "name can no longer contain more than {} characters",
            MAX_PACKAGE_NAME_LEN
        ));
    }
    if name != name.to_lowercase() {
        return Err("name can no longer contain capital letters".to_string());
    }

    // Scoped names validate the scope and the bare name separately.
    let bare = if let Some(rest) = name.strip_prefix('@') {
        let (scope, bare) = rest
            .split_once('/')
            .ok_or_else(|| "scoped name must look like @scope/name".to_string())?;
        validate_name_part(scope)?;
        bare
    } else {
        name
    };
    validate_name_part(bare)
}

fn validate_name_part(part: &str) -> Result<(), String> {
    if part.is_empty() {
        return Err("name length must be greater than zero".to_string());
    }
    if part.starts_with('.') || part.starts_with('_') {
        return Err("name cannot start with a period or an underscore".to_string());
    }
    if let Some(bad) = part
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')))
    {
        return Err(format!("name contains illegal character '{}'", bad));
    }
    Ok(())
}

//! Name derivation for generated artifacts.
//!
//! One user-supplied name yields three spellings:
//!
//! | Input          | selector       | pipe name     | class name    |
//! |----------------|----------------|---------------|---------------|
//! | `user-profile` | `user-profile` | `userProfile` | `UserProfile` |
//! | `Nav Bar`      | `nav-bar`      | `navBar`      | `NavBar`      |
//! | `auth.guard`   | `auth.guard`   | `authGuard`   | `AuthGuard`   |

use serde::Serialize;

use crate::domain::error::DomainError;

/// The derived spellings of an artifact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactName {
    raw: String,
    selector: String,
    pipe_name: String,
    class_name: String,
}

impl ArtifactName {
    /// Validate `raw` and derive all spellings from it.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let invalid = |reason: &str| DomainError::InvalidName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '.' | '_')))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        let pipe_name = to_camel_case(trimmed);
        if pipe_name.is_empty() {
            return Err(invalid("name has no letters or digits"));
        }
        if pipe_name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid("name must start with a letter"));
        }

        Ok(Self {
            raw: raw.to_string(),
            selector: to_selector(trimmed),
            class_name: upper_first(&pipe_name),
            pipe_name,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Hyphen-cased name used for selectors and file names.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Lower camel case name used for `@Pipe({ name })`.
    pub fn pipe_name(&self) -> &str {
        &self.pipe_name
    }

    /// Upper camel case name used for the exported class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Validate a project directory name, returning it trimmed.
///
/// Project names are used verbatim as a directory under the parent, so
/// only single path components are accepted.
pub fn validate_project_name(raw: &str) -> Result<&str, DomainError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| DomainError::InvalidName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("project name cannot be empty"));
    }
    if matches!(trimmed, "." | "..") {
        return Err(invalid("project name must name a new directory"));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(invalid("project name cannot contain path separators"));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(invalid("project name cannot contain control characters"));
    }
    Ok(trimmed)
}

/// Whitespace runs become a single `-`, everything lowercased.
fn to_selector(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// `foo-bar.baz qux` → `fooBarBazQux`
fn to_camel_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut words = lower
        .split(|c: char| c.is_whitespace() || matches!(c, '-' | '.' | '_'))
        .filter(|w| !w.is_empty());

    let mut out = words.next().map(str::to_string).unwrap_or_default();
    for word in words {
        out.push_str(&upper_first(word));
    }
    out
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

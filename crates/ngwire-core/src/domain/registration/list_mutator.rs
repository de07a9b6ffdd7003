//! Rewrites the `declarations: [ ... ],` / `providers: [ ... ],` literals of
//! an `@NgModule` decorator.
//!
//! # Supported shape
//!
//! ```text
//! declarations: [ AppComponent, FooComponent ],
//! providers:    [ ],
//! declarations: [
//!     AppComponent,
//!     FooComponent
//! ],
//! ```
//!
//! The label is matched case sensitively with the colon directly after it,
//! as Angular writes it. The first such label outside a comment is taken, and
//! its list must end at the first `]` with a comma directly after it. Entries
//! must be plain identifiers. Anything else (`RouterModule.forRoot(...)`,
//! object literals, comments inside the brackets) is rejected rather than
//! guessed at.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::comments::blank_comments;
use crate::domain::{error::DomainError, value_objects::ListLabel};

static DECLARATIONS: LazyLock<Regex> = LazyLock::new(|| list_pattern("declarations"));
static PROVIDERS: LazyLock<Regex> = LazyLock::new(|| list_pattern("providers"));
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("identifier pattern compiles"));

fn list_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"\b{label}:\s*\[([^\]]*)\],")).expect("list pattern compiles")
}

fn pattern(label: ListLabel) -> &'static Regex {
    match label {
        ListLabel::Declarations => &*DECLARATIONS,
        ListLabel::Providers => &*PROVIDERS,
    }
}

/// An ordered, duplicate-free list of identifiers under one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationList {
    label: ListLabel,
    members: Vec<String>,
}

impl DeclarationList {
    pub fn new(label: ListLabel) -> Self {
        Self {
            label,
            members: Vec::new(),
        }
    }

    /// Parse the text between the brackets.
    pub fn parse(label: ListLabel, body: &str) -> Result<Self, DomainError> {
        let mut list = Self::new(label);

        for entry in body.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            if !IDENTIFIER.is_match(entry) {
                return Err(DomainError::UnsupportedListEntries {
                    label: label.as_str(),
                    entries: body.trim().to_string(),
                });
            }
            list.push(entry);
        }

        Ok(list)
    }

    /// Append `identifier` unless already present. Returns `true` if added.
    pub fn push(&mut self, identifier: &str) -> bool {
        if self.contains(identifier) {
            return false;
        }
        self.members.push(identifier.to_string());
        true
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.members.iter().any(|m| m == identifier)
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// `label: [ A, B ],`
    pub fn render(&self) -> String {
        if self.members.is_empty() {
            format!("{}: [ ],", self.label)
        } else {
            format!("{}: [ {} ],", self.label, self.members.join(", "))
        }
    }
}

/// Add `identifier` to the `label` list of `source`.
///
/// Returns `source` unchanged when the identifier is already listed; every
/// byte outside the list literal is preserved either way.
pub fn insert(source: &str, label: ListLabel, identifier: &str) -> Result<String, DomainError> {
    let code = blank_comments(source);
    let caps = pattern(label)
        .captures(&code)
        .ok_or(DomainError::PatternNotFound {
            label: label.as_str(),
        })?;
    let span = caps.get_match();
    let body = caps.get(1).map_or("", |m| &source[m.range()]);

    if source[span.range()] != code[span.range()] {
        return Err(DomainError::UnsupportedListEntries {
            label: label.as_str(),
            entries: body.trim().to_string(),
        });
    }

    let mut list = DeclarationList::parse(label, body)?;
    if !list.push(identifier) {
        trace!(%label, identifier, "already listed");
        return Ok(source.to_string());
    }

    let mut out = String::with_capacity(source.len() + identifier.len() + 8);
    out.push_str(&source[..span.start()]);
    out.push_str(&list.render());
    out.push_str(&source[span.end()..]);
    Ok(out)
}

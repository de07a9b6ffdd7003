//! Domain value objects: FeatureKind and ListLabel.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! This file defines the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FeatureKind ───────────────────────────────────────────────────────────────

/// The kind of artifact being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Component,
    Directive,
    Service,
    Pipe,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 4] = [
        Self::Component,
        Self::Directive,
        Self::Service,
        Self::Pipe,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Directive => "directive",
            Self::Service => "service",
            Self::Pipe => "pipe",
        }
    }

    /// Class-name suffix: the capitalised kind (`Service` for `service`).
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Component => "Component",
            Self::Directive => "Directive",
            Self::Service => "Service",
            Self::Pipe => "Pipe",
        }
    }

    /// The `@NgModule` list this kind is registered under.
    pub const fn list_label(&self) -> ListLabel {
        match self {
            Self::Service => ListLabel::Providers,
            _ => ListLabel::Declarations,
        }
    }

    /// Components get their own directory; everything else is a single file.
    pub const fn has_own_directory(&self) -> bool {
        matches!(self, Self::Component)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" | "c" => Ok(Self::Component),
            "directive" | "d" => Ok(Self::Directive),
            "service" | "s" => Ok(Self::Service),
            "pipe" | "p" => Ok(Self::Pipe),
            other => Err(DomainError::UnknownFeatureKind(other.to_string())),
        }
    }
}

// ── ListLabel ─────────────────────────────────────────────────────────────────

/// One of the two `@NgModule` array properties the engine rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLabel {
    Declarations,
    Providers,
}

impl ListLabel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Declarations => "declarations",
            Self::Providers => "providers",
        }
    }
}

impl fmt::Display for ListLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_kind_parses_aliases() {
        assert_eq!("service".parse::<FeatureKind>().unwrap(), FeatureKind::Service);
        assert_eq!("PIPE".parse::<FeatureKind>().unwrap(), FeatureKind::Pipe);
        assert_eq!("c".parse::<FeatureKind>().unwrap(), FeatureKind::Component);
        assert!(matches!(
            "module".parse::<FeatureKind>(),
            Err(DomainError::UnknownFeatureKind(_))
        ));
    }

    #[test]
    fn only_services_are_providers() {
        for kind in FeatureKind::ALL {
            let expected = if kind == FeatureKind::Service {
                ListLabel::Providers
            } else {
                ListLabel::Declarations
            };
            assert_eq!(kind.list_label(), expected, "{kind}");
        }
    }

    #[test]
    fn suffix_is_capitalised_kind() {
        for kind in FeatureKind::ALL {
            let s = kind.as_str();
            let expected = format!("{}{}", s[..1].to_ascii_uppercase(), &s[1..]);
            assert_eq!(kind.suffix(), expected);
        }
    }
}

// ============================================================================
// domain/error.rs - NAMING, BLUEPRINT AND TEXT-SURGERY ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unknown feature kind '{0}'")]
    UnknownFeatureKind(String),

    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Blueprint produced no files")]
    EmptyStructure,

    // ========================================================================
    // Unsupported aggregation-file shape
    // ========================================================================
    #[error("no `{label}: [ ... ],` list found in module file")]
    PatternNotFound { label: &'static str },

    #[error("`{label}` list holds entries that cannot be rewritten safely: {entries}")]
    UnsupportedListEntries { label: &'static str, entries: String },

    #[error("registration anchor `{anchor}` not found in module file")]
    AnchorNotFound { anchor: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits, spaces, dots or hyphens".into(),
                "Examples: user-profile, highlight, auth".into(),
            ],
            Self::UnknownFeatureKind(kind) => vec![
                format!("'{}' is not a feature kind", kind),
                "Supported kinds: component, directive, service, pipe".into(),
            ],
            Self::PatternNotFound { label } => vec![
                format!("The module file has no single `{label}: [ ... ],` list"),
                format!("Add an empty list to @NgModule: `{label}: [ ],`"),
                "Lists must end with `],` (a trailing comma is required)".into(),
            ],
            Self::UnsupportedListEntries { label, .. } => vec![
                format!("The `{label}` list contains expressions or comments"),
                "Only plain identifiers separated by commas can be rewritten".into(),
                "Register the artifact by hand, or move the expressions into a constant".into(),
            ],
            Self::AnchorNotFound { anchor } => vec![
                format!("The module file does not contain `{anchor}`"),
                "Run the command from inside an Angular application".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::UnknownFeatureKind(_) => ErrorCategory::Validation,
            Self::PatternNotFound { .. }
            | Self::UnsupportedListEntries { .. }
            | Self::AnchorNotFound { .. } => ErrorCategory::UnsupportedInput,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnsupportedInput,
    Internal,
}

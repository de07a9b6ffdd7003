//! Unified error handling for ngwire core.
//!
//! Wraps domain and application errors behind one type carrying
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ngwire core operations.
#[derive(Debug, Error, Clone)]
pub enum NgwireError {
    /// Naming rules or an unsupported module-file shape.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Filesystem, lookup and installer failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl NgwireError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run `ngwire config path` to see which file is loaded".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in ngwire".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::UnsupportedInput => ErrorCategory::UnsupportedInput,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnsupportedInput,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type NgwireResult<T> = Result<T, NgwireError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn categories_follow_the_wrapped_error() {
        let err: NgwireError = DomainError::AnchorNotFound { anchor: "@NgModule({" }.into();
        assert_eq!(err.category(), ErrorCategory::UnsupportedInput);

        let err: NgwireError = ApplicationError::ModuleNotFound {
            searched_from: PathBuf::from("/tmp"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn wrapped_message_is_not_prefixed() {
        let err: NgwireError = DomainError::PatternNotFound { label: "providers" }.into();
        assert_eq!(
            err.to_string(),
            "no `providers: [ ... ],` list found in module file"
        );
    }
}

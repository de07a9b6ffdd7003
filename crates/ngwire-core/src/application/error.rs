//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No aggregation file among the candidate locations.
    #[error("no app.module.ts found near {searched_from}")]
    ModuleNotFound { searched_from: PathBuf },

    /// The rewritten module file could not be saved.
    #[error("failed to write {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A generated file would overwrite an existing one.
    #[error("{path} already exists")]
    ArtifactExists { path: PathBuf },

    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    #[error("`{command}` failed: {reason}")]
    InstallFailed { command: String, reason: String },

    /// In-memory filesystem lock poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,

    /// Starter project directory missing or unreadable.
    #[error("Starter project unavailable at {path}: {reason}")]
    StarterUnavailable { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModuleNotFound { .. } => vec![
                "Run the command from src/app or one of its subdirectories".into(),
                "Generated files were kept; register the artifact by hand".into(),
                "Use --no-register to skip registration".into(),
            ],
            Self::WriteFailure { path, .. } => vec![
                format!("Check that {} is writable", path.display()),
                "The module file was left unchanged".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("Remove {} or pick another name", path.display()),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::InstallFailed { command, .. } => vec![
                format!("Run `{}` inside the project directory", command),
                "Use --skip-install to create the project without installing".into(),
            ],
            Self::StarterUnavailable { path, .. } => vec![
                format!("Check that {} exists", path.display()),
                "Unset project.starter_dir to use the built-in starter".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleNotFound { .. } => ErrorCategory::NotFound,
            Self::ArtifactExists { .. } | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::StarterUnavailable { .. } => ErrorCategory::Configuration,
            Self::WriteFailure { .. }
            | Self::FilesystemError { .. }
            | Self::InstallFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

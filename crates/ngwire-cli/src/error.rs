//! Errors surfaced by the `ngwire` binary.
//!
//! Core errors are wrapped rather than re-described, so their suggestions
//! and categories flow through unchanged.  [`CliError::exit_code`] is the
//! single source of process exit codes.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use ngwire_core::application::RegistrationFailure;
use ngwire_core::error::NgwireError;

pub use ngwire_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `ngwire-core`.
    #[error("{0}")]
    Core(#[from] NgwireError),

    /// The artifact was generated but could not be registered.
    ///
    /// Generated files are kept; only `app.module.ts` is left untouched.
    #[error("Registration failed at stage `{stage}`: {source}")]
    Registration {
        stage: String,
        files: Vec<PathBuf>,
        #[source]
        source: NgwireError,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap a failed registration together with the files already generated.
    pub fn registration(failure: RegistrationFailure, files: Vec<PathBuf>) -> Self {
        Self::Registration {
            stage: failure.stage.to_string(),
            files,
            source: failure.source,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "Run the command with --help to see what it accepts".into(),
                "`ngwire config list` shows every valid config key".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Run 'ngwire config path' to see which file is loaded".into(),
                "NGWIRE__<SECTION>__<KEY> environment variables also feed the config".into(),
                "Use 'ngwire init --force' to rewrite the defaults".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::Registration { source, files, .. } => {
                let mut suggestions = source.suggestions();
                if !files.is_empty() {
                    suggestions.push(format!(
                        "{} generated file(s) were kept; fix app.module.ts and add the entry by hand",
                        files.len()
                    ));
                }
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("{message}; check that the path exists and is writable"),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) | Self::Registration { source: core, .. } => {
                ErrorCategory::from(core.category())
            }
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, cause chain (with `verbose`) and suggestions, coloured.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, colour: bool) -> String {
        let paint = |text: String, style: fn(&str) -> String| {
            if colour { style(&text) } else { text }
        };
        let mut out = String::new();

        out.push_str(&paint(format!("\nerror: {self}\n"), |t| t.red().bold().to_string()));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(format!("  caused by: {err}\n"), |t| t.dimmed().to_string()));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&paint("\nSuggestions:\n".into(), |t| t.yellow().bold().to_string()));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&paint(
                "\nRe-run with -v for the full cause chain.\n".into(),
                |t| t.dimmed().to_string(),
            ));
        }

        out
    }

    /// Emit one tracing event; severity follows the category.
    pub fn log(&self) {
        let category = self.category();
        let exit_code = self.exit_code();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code, error = %self, "command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code, error = %self, "command failed")
            }
        }
    }
}

/// Drives the exit code and the log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, or a module file ngwire will not edit.
    UserError,
    /// No `app.module.ts` near the working directory.
    NotFound,
    Configuration,
    Internal,
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation | CoreCategory::UnsupportedInput => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

//! Dependency installation through an external package manager.

use std::path::Path;
use std::process::{Command, Stdio};

use ngwire_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::NgwireResult,
};
use tracing::{debug, instrument};

/// Runs `<program> <args...>` inside the project directory.
///
/// Output is captured rather than streamed, so a progress spinner can own
/// the terminal while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmInstaller {
    program: String,
    args: Vec<String>,
}

impl NpmInstaller {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new("npm", ["install"])
    }
}

impl PackageInstaller for NpmInstaller {
    #[instrument(skip(self), fields(command = %self.command_line()))]
    fn install(&self, project_dir: &Path) -> NgwireResult<()> {
        let failed = |reason: String| ApplicationError::InstallFailed {
            command: self.command_line(),
            reason,
        };

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| failed(format!("could not start `{}`: {e}", self.program)))?;

        debug!(
            status = %output.status,
            stdout = %String::from_utf8_lossy(&output.stdout),
            "installer finished"
        );

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            Some(last) => format!("{}: {}", output.status, last.trim()),
            None => output.status.to_string(),
        };
        Err(failed(reason).into())
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

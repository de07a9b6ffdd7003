//! Driven (output) ports - implemented by infrastructure.
//!
//! The `ngwire-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ProjectStructure;
use crate::error::NgwireResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ngwire_adapters::filesystem::LocalFilesystem` (production)
/// - `ngwire_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NgwireResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> NgwireResult<()>;

    /// Write raw bytes to a file, replacing any previous content.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> NgwireResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_file(&self, path: &Path) -> NgwireResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> NgwireResult<()>;
}

/// Port supplying the files of a fresh project.
///
/// Implemented by:
/// - `ngwire_adapters::starter::BuiltinStarter` (embedded quickstart)
/// - `ngwire_adapters::starter::DirectoryStarter` (user directory)
#[cfg_attr(test, mockall::automock)]
pub trait StarterSource: Send + Sync {
    /// All files of the starter, rooted at `root`, with the project name
    /// substituted.
    fn load(&self, root: &Path, project_name: &str) -> NgwireResult<ProjectStructure>;

    /// Where the starter comes from, for display.
    fn describe(&self) -> String;
}

/// Port for installing a project's dependencies.
///
/// Implemented by `ngwire_adapters::installer::NpmInstaller`.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// Run the installer inside `project_dir`.
    fn install(&self, project_dir: &Path) -> NgwireResult<()>;

    /// The command as a user would type it (`npm install`).
    fn command_line(&self) -> String;
}

//! Project Service - creates a new project from a starter.
//!
//! Scaffolding and dependency installation are separate calls so the caller
//! can show progress in between. Installation never undoes scaffolding.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PackageInstaller, StarterSource},
    },
    domain::{FileContent, FsEntry, ProjectStructure, validate_project_name},
    error::{NgwireError, NgwireResult},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub root: PathBuf,
    /// Files created, in creation order.
    pub created: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum InstallOutcome {
    /// No installer configured, or `--skip-install`.
    Skipped,
    Succeeded { command: String },
    Failed { command: String, error: NgwireError },
}

pub struct ProjectService<'a> {
    filesystem: &'a dyn Filesystem,
    starter: &'a dyn StarterSource,
    installer: Option<&'a dyn PackageInstaller>,
}

impl<'a> ProjectService<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, starter: &'a dyn StarterSource) -> Self {
        Self {
            filesystem,
            starter,
            installer: None,
        }
    }

    pub fn with_installer(mut self, installer: &'a dyn PackageInstaller) -> Self {
        self.installer = Some(installer);
        self
    }

    /// Copy the starter into `parent/name`.
    ///
    /// Fails without touching anything if the directory already exists. A
    /// failed copy removes the partially created directory.
    #[instrument(skip_all, fields(name = %name, parent = %parent.display()))]
    pub fn create(&self, name: &str, parent: &Path) -> NgwireResult<ProjectReport> {
        let name = validate_project_name(name)?;
        let root = parent.join(name);

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let structure = self.starter.load(&root, name)?;
        structure.validate()?;
        info!(starter = %self.starter.describe(), entries = structure.entry_count(), "starter loaded");

        match self.write_all(&structure) {
            Ok(created) => {
                info!(files = created.len(), "project created");
                Ok(ProjectReport { root, created })
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&root);
                Err(e)
            }
        }
    }

    /// Run the configured installer inside `root`.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn install(&self, root: &Path) -> InstallOutcome {
        let Some(installer) = self.installer else {
            return InstallOutcome::Skipped;
        };

        let command = installer.command_line();
        match installer.install(root) {
            Ok(()) => {
                info!(%command, "dependencies installed");
                InstallOutcome::Succeeded { command }
            }
            Err(error) => {
                warn!(%command, %error, "install failed");
                InstallOutcome::Failed { command, error }
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> NgwireResult<Vec<PathBuf>> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        let mut created = Vec::new();
        for entry in structure.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    match &file.content {
                        FileContent::Text(text) => self.filesystem.write_file(&path, text)?,
                        FileContent::Binary(bytes) => self.filesystem.write_bytes(&path, bytes)?,
                    }
                    created.push(path);
                }
            }
        }
        Ok(created)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}

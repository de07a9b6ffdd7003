//! A starter project read from a user-supplied directory.
//!
//! Every regular file under the directory is copied. Text files get
//! `{{PROJECT_NAME}}` substituted; anything that is not UTF-8 is copied byte
//! for byte. `node_modules/` and `.git/` are skipped.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use ngwire_core::{
    application::{ApplicationError, ports::StarterSource},
    domain::{ProjectStructure, RenderContext},
    error::{NgwireError, NgwireResult},
};
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: [&str; 2] = ["node_modules", ".git"];

#[derive(Debug, Clone)]
pub struct DirectoryStarter {
    dir: PathBuf,
}

impl DirectoryStarter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn unavailable(&self, reason: impl Into<String>) -> NgwireError {
        ApplicationError::StarterUnavailable {
            path: self.dir.clone(),
            reason: reason.into(),
        }
        .into()
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && SKIPPED_DIRS
            .iter()
            .any(|skip| entry.file_name() == OsStr::new(skip))
}

impl StarterSource for DirectoryStarter {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, root: &Path, project_name: &str) -> NgwireResult<ProjectStructure> {
        if !self.dir.is_dir() {
            return Err(self.unavailable("not a directory"));
        }

        let ctx = RenderContext::for_project(project_name);
        let mut structure = ProjectStructure::new(root);

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped(e))
        {
            let entry = entry.map_err(|e| self.unavailable(format!("directory walk error: {e}")))?;
            let rel = entry
                .path()
                .strip_prefix(&self.dir)
                .map_err(|_| self.unavailable("entry outside starter directory"))?;

            if entry.file_type().is_dir() {
                structure.add_directory(rel);
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let bytes = fs::read(entry.path()).map_err(|e| {
                self.unavailable(format!("failed to read '{}': {e}", rel.display()))
            })?;
            match String::from_utf8(bytes) {
                Ok(text) => {
                    debug!(file = %rel.display(), "starter file");
                    structure.add_file(rel, ctx.render(&text));
                }
                Err(e) => {
                    debug!(file = %rel.display(), "binary starter file");
                    structure.add_binary_file(rel, e.into_bytes());
                }
            }
        }

        Ok(structure)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

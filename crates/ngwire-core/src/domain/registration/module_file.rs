use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::ListLabel};

use super::{import_injector, list_mutator, path_resolver};

/// The aggregation file being edited.
///
/// Read once, rewritten in memory, written once. A failed step leaves the
/// text as it was before that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    path: PathBuf,
    text: String,
    changed: bool,
}

impl ModuleFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory import specifiers are relative to.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Whether any step altered the text.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn import_path_for(&self, artifact_path: &Path) -> String {
        path_resolver::relative_import_path(self.dir(), artifact_path)
    }

    pub fn add_to_list(&mut self, label: ListLabel, identifier: &str) -> Result<(), DomainError> {
        let next = list_mutator::insert(&self.text, label, identifier)?;
        self.replace(next);
        Ok(())
    }

    pub fn ensure_import(&mut self, symbol: &str, import_path: &str) -> Result<(), DomainError> {
        let next = import_injector::insert(&self.text, symbol, import_path)?;
        self.replace(next);
        Ok(())
    }

    fn replace(&mut self, next: String) {
        if next != self.text {
            self.text = next;
            self.changed = true;
        }
    }
}

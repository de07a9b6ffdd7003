use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Files and directories ready for materialization under `root`.
///
/// Produced by blueprint rendering and by starter sources.
/// It contains no business logic, only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content: FileContent::Text(content),
        }));
    }

    /// A file copied byte for byte (images, fonts).
    pub fn add_binary_file(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content: FileContent::Binary(bytes),
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content.into());
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files().next().is_none() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    /// Absolute (root-joined) paths of every file, in entry order.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files().map(|f| self.root.join(&f.path)).collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: FileContent,
}

impl FileToWrite {
    /// The content, unless the file is binary.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_correctly() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_directory("src")
            .with_file("src/main.ts", "bootstrap();");

        assert_eq!(structure.entry_count(), 2);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.directories().count(), 1);
        assert_eq!(
            structure.file_paths(),
            vec![PathBuf::from("/tmp/test/src/main.ts")]
        );
    }

    #[test]
    fn rejects_duplicates() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_file("main.ts", "")
            .with_file("main.ts", "");

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn binary_files_have_no_text() {
        let mut structure = ProjectStructure::new("/tmp/test").with_file("index.html", "<html>");
        structure.add_binary_file("favicon.ico", vec![0x00, 0x00, 0x01, 0x00, 0xff]);

        let texts: Vec<_> = structure.files().map(FileToWrite::text).collect();
        assert_eq!(texts, [Some("<html>"), None]);
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn rejects_empty() {
        let structure = ProjectStructure::new("/tmp/test").with_directory("src");
        assert_eq!(structure.validate(), Err(DomainError::EmptyStructure));
    }

    #[test]
    #[cfg(unix)]
    fn rejects_absolute_entries() {
        let structure = ProjectStructure::new("/tmp/test").with_file("/etc/passwd", "");
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}

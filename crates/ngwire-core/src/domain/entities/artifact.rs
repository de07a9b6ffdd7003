use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    naming::ArtifactName,
    value_objects::{FeatureKind, ListLabel},
};

/// A request to generate one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub kind: FeatureKind,
    pub name: ArtifactName,
}

impl ArtifactRequest {
    pub fn new(kind: FeatureKind, name: ArtifactName) -> Self {
        Self { kind, name }
    }
}

/// An artifact whose source file has been (or would be) written.
///
/// Consumed read-only by the registration engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub feature_kind: FeatureKind,
    pub selector_name: String,
    pub pipe_name: String,
    /// Bare class name without the kind suffix (`Foo`, not `FooService`).
    pub class_name: String,
    /// The `.ts` file exporting the class.
    pub file_path: PathBuf,
}

impl GeneratedArtifact {
    pub fn new(request: &ArtifactRequest, file_path: impl Into<PathBuf>) -> Self {
        Self {
            feature_kind: request.kind,
            selector_name: request.name.selector().to_string(),
            pipe_name: request.name.pipe_name().to_string(),
            class_name: request.name.class_name().to_string(),
            file_path: file_path.into(),
        }
    }

    /// Exported symbol: class name plus capitalised kind (`FooService`).
    pub fn symbol_name(&self) -> String {
        format!("{}{}", self.class_name, self.feature_kind.suffix())
    }

    pub fn list_label(&self) -> ListLabel {
        self.feature_kind.list_label()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

//! Core domain layer for ngwire.
//!
//! Pure logic only: naming rules, artifact blueprints and the text surgery
//! that registers an artifact in `app.module.ts`. Filesystem access and
//! process spawning live behind the ports of the application layer.
//!
//! - **No I/O**: every transform takes text and returns text
//! - **No shared state**: values are passed explicitly between steps
//! - **Unsupported input is an error**, never a best-effort edit

pub mod blueprint;
pub mod entities;
pub mod error;
pub mod naming;
pub mod registration;
pub mod value_objects;

pub use blueprint::{Blueprint, BlueprintFile, RenderedArtifact};
pub use entities::{
    ArtifactRequest, DirectoryToCreate, FileContent, FileToWrite, FsEntry, GeneratedArtifact,
    ProjectStructure, RenderContext,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{ArtifactName, validate_project_name};
pub use registration::{DeclarationList, ImportStatement, ModuleFile, relative_import_path};
pub use value_objects::{FeatureKind, ListLabel};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn rendered_artifact_registers_against_module() {
        let request = ArtifactRequest::new(
            FeatureKind::Component,
            ArtifactName::parse("user profile").unwrap(),
        );
        let rendered = Blueprint::for_kind(request.kind)
            .render(&request, Path::new("/proj/src/app/widgets"))
            .unwrap();
        let artifact = rendered.artifact;

        let mut module = ModuleFile::new(
            "/proj/src/app/app.module.ts",
            "@NgModule({\n\tdeclarations: [ AppComponent ],\n})",
        );
        let import = module.import_path_for(artifact.file_path());
        module
            .add_to_list(artifact.list_label(), &artifact.symbol_name())
            .unwrap();
        module.ensure_import(&artifact.symbol_name(), &import).unwrap();

        assert_eq!(
            module.text(),
            "import { UserProfileComponent } from './widgets/user-profile/user-profile.component';\n\
             @NgModule({\n\tdeclarations: [ AppComponent, UserProfileComponent ],\n})"
        );
    }
}

pub mod artifact;
pub mod project_structure;
pub mod render_context;

pub use artifact::{ArtifactRequest, GeneratedArtifact};
pub use project_structure::{DirectoryToCreate, FileContent, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::RenderContext;

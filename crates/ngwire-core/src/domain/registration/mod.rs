//! Text surgery on the module aggregation file.
//!
//! Every transform here is `&str -> Result<String, DomainError>`: a failure
//! means nothing was edited. Matching ignores commented-out code.

pub mod comments;
pub mod import_injector;
pub mod list_mutator;
pub mod module_file;
pub mod path_resolver;

pub use import_injector::{ANCHOR, ImportStatement, parse_imports};
pub use list_mutator::DeclarationList;
pub use module_file::ModuleFile;
pub use path_resolver::{SOURCE_EXTENSION, normalize, relative_import_path};

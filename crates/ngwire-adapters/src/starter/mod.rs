//! Starter project sources.

mod builtin;
mod directory;

pub use builtin::BuiltinStarter;
pub use directory::DirectoryStarter;

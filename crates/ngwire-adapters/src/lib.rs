//! Infrastructure adapters for ngwire.
//!
//! This crate implements the ports defined in `ngwire_core::application::ports`.
//! It contains all I/O: the filesystem, starter projects and the package
//! installer process.

pub mod filesystem;
pub mod installer;
pub mod starter;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::NpmInstaller;
pub use starter::{BuiltinStarter, DirectoryStarter};

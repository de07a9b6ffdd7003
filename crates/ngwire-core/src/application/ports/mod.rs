//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the services and implemented in
//! `ngwire-adapters`:
//!
//! - `Filesystem`: file reads and writes
//! - `StarterSource`: the files of a new project
//! - `PackageInstaller`: dependency installation

pub mod output;

pub use output::{Filesystem, PackageInstaller, StarterSource};

#[cfg(test)]
pub use output::{MockFilesystem, MockPackageInstaller, MockStarterSource};

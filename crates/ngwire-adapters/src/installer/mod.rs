//! Package installer adapters.

mod npm;

pub use npm::NpmInstaller;

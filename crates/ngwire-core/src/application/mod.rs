//! Application layer for ngwire.
//!
//! This layer contains:
//! - **Services**: use case orchestration (generate, register, create project)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! All text rules live in `crate::domain`; services only sequence I/O
//! around them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerateOptions, GenerateReport, GenerateService, InstallOutcome, ModuleLocator,
    ModuleRegistrar, ProjectReport, ProjectService, Registration, RegistrationFailure,
    RegistrationOutcome, RegistrationStage,
};

pub use ports::{Filesystem, PackageInstaller, StarterSource};

pub use error::ApplicationError;

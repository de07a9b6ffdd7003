//! ngwire core: generate Angular artifacts and register them in
//! `app.module.ts`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              ngwire-cli                 │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerateService, ModuleRegistrar,      │
//! │  ProjectService)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StarterSource,             │
//! │  PackageInstaller)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ngwire-adapters              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (naming, blueprints, registration text surgery) does no
//! I/O at all.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use std::path::Path;
//! # fn demo(fs: &dyn ngwire_core::application::ports::Filesystem) -> ngwire_core::error::NgwireResult<()> {
//! use ngwire_core::prelude::*;
//!
//! let request = ArtifactRequest::new(FeatureKind::Service, ArtifactName::parse("foo")?);
//! let report = GenerateService::new(fs).generate(&request, Path::new("src/app"))?;
//! println!("{} files", report.files.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateService, ModuleLocator, ModuleRegistrar, ProjectReport,
        ProjectService, RegistrationOutcome,
        ports::{Filesystem, PackageInstaller, StarterSource},
    };
    pub use crate::domain::{
        ArtifactName, ArtifactRequest, FeatureKind, GeneratedArtifact, ListLabel,
        ProjectStructure,
    };
    pub use crate::error::{NgwireError, NgwireResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! "generate an artifact", "register it" and "create a project".

pub mod generate_service;
pub mod module_locator;
pub mod project_service;
pub mod registration_service;

pub use generate_service::{GenerateOptions, GenerateReport, GenerateService};
pub use module_locator::{MODULE_CANDIDATES, ModuleLocator};
pub use project_service::{InstallOutcome, ProjectReport, ProjectService};
pub use registration_service::{
    ModuleRegistrar, Registration, RegistrationFailure, RegistrationOutcome, RegistrationStage,
};

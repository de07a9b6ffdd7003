//! Registers a generated artifact in its `app.module.ts`.
//!
//! One registration is a single read-modify-write:
//!
//! ```text
//! Idle → Located → Read → Mutated → Injected → Written
//!   └──────────┴───────┴────────┴─────────┴──────→ Failed(stage, error)
//! ```
//!
//! Failure at any stage is terminal. Nothing is written unless every text
//! transform succeeded, and generated artifact files are never touched.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::ModuleLocator},
    domain::{GeneratedArtifact, ListLabel, ModuleFile},
    error::NgwireError,
};

/// Last stage a registration reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStage {
    Idle,
    Located,
    Read,
    Mutated,
    Injected,
    Written,
}

impl fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Located => "located",
            Self::Read => "read",
            Self::Mutated => "mutated",
            Self::Injected => "injected",
            Self::Written => "written",
        };
        f.write_str(s)
    }
}

/// A registration that went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub module_path: PathBuf,
    pub symbol: String,
    pub label: ListLabel,
    pub import_path: String,
    /// `false` when the module already listed and imported the symbol.
    pub changed: bool,
    /// `false` for a dry run, or when there was nothing to change.
    pub written: bool,
}

/// A registration that stopped early. The module file is as it was.
#[derive(Debug, Clone, Error)]
#[error("registration stopped after stage `{stage}`: {source}")]
pub struct RegistrationFailure {
    pub stage: RegistrationStage,
    #[source]
    pub source: NgwireError,
}

impl RegistrationFailure {
    fn at(stage: RegistrationStage) -> impl FnOnce(NgwireError) -> Self {
        move |source| Self { stage, source }
    }
}

impl From<RegistrationFailure> for NgwireError {
    fn from(failure: RegistrationFailure) -> Self {
        failure.source
    }
}

/// What happened to the registration step of a `generate`.
#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    Registered(Registration),
    /// Registration turned off by flag or config.
    Skipped,
    Failed(RegistrationFailure),
}

impl RegistrationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<Result<Registration, RegistrationFailure>> for RegistrationOutcome {
    fn from(result: Result<Registration, RegistrationFailure>) -> Self {
        match result {
            Ok(registration) => Self::Registered(registration),
            Err(failure) => Self::Failed(failure),
        }
    }
}

/// Composes locator, path resolution and text transforms into one
/// registration.
pub struct ModuleRegistrar<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ModuleRegistrar<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Register `artifact` in the module found from `cwd` and save it.
    #[instrument(skip_all, fields(symbol = %artifact.symbol_name(), cwd = %cwd.display()))]
    pub fn register(
        &self,
        artifact: &GeneratedArtifact,
        cwd: &Path,
    ) -> Result<Registration, RegistrationFailure> {
        let (module, mut registration) = self.prepare(artifact, cwd)?;

        if !module.is_changed() {
            info!(module = %module.path().display(), "already registered");
            return Ok(registration);
        }

        self.filesystem
            .write_file(module.path(), module.text())
            .map_err(|e| {
                NgwireError::from(ApplicationError::WriteFailure {
                    path: module.path().to_path_buf(),
                    reason: e.to_string(),
                })
            })
            .map_err(RegistrationFailure::at(RegistrationStage::Injected))?;

        debug!(stage = %RegistrationStage::Written, "module saved");
        info!(module = %module.path().display(), "registered");
        registration.written = true;
        Ok(registration)
    }

    /// Everything `register` does except the final write.
    #[instrument(skip_all, fields(symbol = %artifact.symbol_name(), cwd = %cwd.display()))]
    pub fn plan(
        &self,
        artifact: &GeneratedArtifact,
        cwd: &Path,
    ) -> Result<Registration, RegistrationFailure> {
        self.prepare(artifact, cwd).map(|(_, registration)| registration)
    }

    fn prepare(
        &self,
        artifact: &GeneratedArtifact,
        cwd: &Path,
    ) -> Result<(ModuleFile, Registration), RegistrationFailure> {
        let symbol = artifact.symbol_name();
        let label = artifact.list_label();

        let module_path = ModuleLocator::new(self.filesystem)
            .find(cwd)
            .map_err(RegistrationFailure::at(RegistrationStage::Idle))?;
        debug!(stage = %RegistrationStage::Located, module = %module_path.display());

        let text = self
            .filesystem
            .read_file(&module_path)
            .map_err(RegistrationFailure::at(RegistrationStage::Located))?;
        let mut module = ModuleFile::new(module_path, text);
        debug!(stage = %RegistrationStage::Read, bytes = module.text().len());

        let import_path = module.import_path_for(artifact.file_path());

        module
            .add_to_list(label, &symbol)
            .map_err(NgwireError::from)
            .map_err(RegistrationFailure::at(RegistrationStage::Read))?;
        debug!(stage = %RegistrationStage::Mutated, %label);

        module
            .ensure_import(&symbol, &import_path)
            .map_err(NgwireError::from)
            .map_err(RegistrationFailure::at(RegistrationStage::Mutated))?;
        debug!(stage = %RegistrationStage::Injected, import = %import_path);

        let registration = Registration {
            module_path: module.path().to_path_buf(),
            symbol,
            label,
            import_path,
            changed: module.is_changed(),
            written: false,
        };
        Ok((module, registration))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{ArtifactName, ArtifactRequest, DomainError, FeatureKind},
    };

    const MODULE_PATH: &str = "/proj/src/app/app.module.ts";

    const MODULE: &str = "import { NgModule } from '@angular/core';\n\
                          import { AppComponent } from './app.component';\n\
                          \n\
                          @NgModule({\n\
                          \tdeclarations: [ AppComponent ],\n\
                          \tproviders: [ ],\n\
                          \tbootstrap: [ AppComponent ]\n\
                          })\n\
                          export class AppModule { }\n";

    fn artifact(kind: FeatureKind, name: &str, path: &str) -> GeneratedArtifact {
        let request = ArtifactRequest::new(kind, ArtifactName::parse(name).unwrap());
        GeneratedArtifact::new(&request, path)
    }

    fn module_fs(text: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new(MODULE_PATH));
        fs.expect_read_file()
            .with(eq(Path::new(MODULE_PATH)))
            .returning(move |_| Ok(text.to_string()));
        fs
    }

    #[test]
    fn registers_service_in_providers() {
        let mut fs = module_fs(MODULE);
        fs.expect_write_file()
            .times(1)
            .withf(|path, content| {
                path == Path::new(MODULE_PATH)
                    && content.contains("\tproviders: [ FooService ],\n")
                    && content.contains(
                        "import { FooService } from './foo.service';\n@NgModule({",
                    )
            })
            .returning(|_, _| Ok(()));

        let foo = artifact(FeatureKind::Service, "foo", "/proj/src/app/foo.service.ts");
        let registration = ModuleRegistrar::new(&fs)
            .register(&foo, Path::new("/proj/src/app"))
            .unwrap();

        assert_eq!(registration.symbol, "FooService");
        assert_eq!(registration.label, ListLabel::Providers);
        assert_eq!(registration.import_path, "./foo.service");
        assert!(registration.written);
    }

    #[test]
    fn missing_module_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_file().never();
        fs.expect_write_file().never();

        let foo = artifact(FeatureKind::Component, "foo", "/tmp/foo/foo.component.ts");
        let failure = ModuleRegistrar::new(&fs)
            .register(&foo, Path::new("/tmp"))
            .unwrap_err();

        assert_eq!(failure.stage, RegistrationStage::Idle);
        assert!(matches!(
            failure.source,
            NgwireError::Application(ApplicationError::ModuleNotFound { .. })
        ));
    }

    #[test]
    fn malformed_module_writes_nothing() {
        let mut fs = module_fs("@NgModule({\n\tbootstrap: [ AppComponent ]\n})\n");
        fs.expect_write_file().never();

        let foo = artifact(FeatureKind::Directive, "foo", "/proj/src/app/foo.directive.ts");
        let failure = ModuleRegistrar::new(&fs)
            .register(&foo, Path::new("/proj/src/app"))
            .unwrap_err();

        assert_eq!(failure.stage, RegistrationStage::Read);
        assert!(matches!(
            failure.source,
            NgwireError::Domain(DomainError::PatternNotFound {
                label: "declarations"
            })
        ));
    }

    #[test]
    fn missing_anchor_writes_nothing() {
        let mut fs = module_fs("export const config = {\n\tdeclarations: [ A ],\n};\n");
        fs.expect_write_file().never();

        let foo = artifact(FeatureKind::Pipe, "foo", "/proj/src/app/foo.pipe.ts");
        let failure = ModuleRegistrar::new(&fs)
            .register(&foo, Path::new("/proj/src/app"))
            .unwrap_err();

        assert_eq!(failure.stage, RegistrationStage::Mutated);
        assert!(matches!(
            failure.source,
            NgwireError::Domain(DomainError::AnchorNotFound { .. })
        ));
    }

    #[test]
    fn already_registered_skips_the_write() {
        let mut fs = module_fs(MODULE);
        fs.expect_write_file().never();

        let app = artifact(FeatureKind::Component, "app", "/proj/src/app/app.component.ts");
        let registration = ModuleRegistrar::new(&fs)
            .register(&app, Path::new("/proj/src/app"))
            .unwrap();

        assert!(!registration.changed);
        assert!(!registration.written);
    }

    #[test]
    fn rejected_write_is_write_failure() {
        let mut fs = module_fs(MODULE);
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let foo = artifact(FeatureKind::Service, "foo", "/proj/src/app/foo.service.ts");
        let failure = ModuleRegistrar::new(&fs)
            .register(&foo, Path::new("/proj/src/app"))
            .unwrap_err();

        assert_eq!(failure.stage, RegistrationStage::Injected);
        assert!(matches!(
            failure.source,
            NgwireError::Application(ApplicationError::WriteFailure { .. })
        ));
    }

    #[test]
    fn plan_never_writes() {
        let mut fs = module_fs(MODULE);
        fs.expect_write_file().never();

        let foo = artifact(FeatureKind::Component, "foo", "/proj/src/app/foo/foo.component.ts");
        let registration = ModuleRegistrar::new(&fs)
            .plan(&foo, Path::new("/proj/src/app"))
            .unwrap();

        assert!(registration.changed);
        assert!(!registration.written);
        assert_eq!(registration.import_path, "./foo/foo.component");
    }
}

//! Generate Service - writes one artifact, then registers it.
//!
//! 1. Render the blueprint for the requested kind
//! 2. Refuse to overwrite existing files
//! 3. Write through the `Filesystem` port
//! 4. Register in `app.module.ts` (unless disabled)
//!
//! The registration outcome is reported next to the written files. A failed
//! registration leaves the files in place.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{ModuleRegistrar, RegistrationOutcome},
    },
    domain::{
        ArtifactRequest, Blueprint, FileContent, FsEntry, GeneratedArtifact, ProjectStructure,
    },
    error::NgwireResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render and plan without touching the filesystem.
    pub dry_run: bool,
    /// Register the artifact in `app.module.ts`.
    pub register: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            register: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub artifact: GeneratedArtifact,
    /// Every file written (or that would be written on a dry run).
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
    pub registration: RegistrationOutcome,
}

pub struct GenerateService<'a> {
    filesystem: &'a dyn Filesystem,
    options: GenerateOptions,
}

impl<'a> GenerateService<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    #[instrument(
        skip_all,
        fields(kind = %request.kind, name = %request.name.selector(), cwd = %cwd.display())
    )]
    pub fn generate(&self, request: &ArtifactRequest, cwd: &Path) -> NgwireResult<GenerateReport> {
        let rendered = Blueprint::for_kind(request.kind).render(request, cwd)?;
        let files = rendered.structure.file_paths();

        if let Some(existing) = files.iter().find(|p| self.filesystem.exists(p)) {
            return Err(ApplicationError::ArtifactExists {
                path: existing.clone(),
            }
            .into());
        }

        if !self.options.dry_run {
            self.write_structure(&rendered.structure)?;
            info!(files = files.len(), "artifact written");
        }

        let registrar = ModuleRegistrar::new(self.filesystem);
        let registration = match (self.options.register, self.options.dry_run) {
            (false, _) => RegistrationOutcome::Skipped,
            (true, true) => registrar.plan(&rendered.artifact, cwd).into(),
            (true, false) => registrar.register(&rendered.artifact, cwd).into(),
        };

        if let RegistrationOutcome::Failed(failure) = &registration {
            warn!(error = %failure.source, stage = %failure.stage, "registration failed");
        }

        Ok(GenerateReport {
            artifact: rendered.artifact,
            files,
            dry_run: self.options.dry_run,
            registration,
        })
    }

    fn write_structure(&self, structure: &ProjectStructure) -> NgwireResult<()> {
        let root = structure.root();
        for entry in structure.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    match &file.content {
                        FileContent::Text(text) => self.filesystem.write_file(&path, text)?,
                        FileContent::Binary(bytes) => self.filesystem.write_bytes(&path, bytes)?,
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::{ports::MockFilesystem, services::RegistrationStage},
        domain::{ArtifactName, FeatureKind},
    };

    const MODULE_PATH: &str = "/proj/src/app/app.module.ts";
    const MODULE: &str = "@NgModule({\n\tdeclarations: [ AppComponent ],\n\tproviders: [ ],\n})\n";

    fn request(kind: FeatureKind, name: &str) -> ArtifactRequest {
        ArtifactRequest::new(kind, ArtifactName::parse(name).unwrap())
    }

    /// Mock with a module file present and every write recorded.
    fn recording_fs(writes: Arc<Mutex<Vec<PathBuf>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new(MODULE_PATH));
        fs.expect_read_file().returning(|_| Ok(MODULE.to_string()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |p, _| {
            writes.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        fs
    }

    #[test]
    fn component_files_then_module() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let fs = recording_fs(writes.clone());

        let report = GenerateService::new(&fs)
            .generate(&request(FeatureKind::Component, "foo"), Path::new("/proj/src/app"))
            .unwrap();

        assert_eq!(report.files.len(), 4);
        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 5);
        assert_eq!(writes.last().unwrap(), Path::new(MODULE_PATH));
        assert!(matches!(
            report.registration,
            RegistrationOutcome::Registered(ref r) if r.symbol == "FooComponent"
        ));
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let err = GenerateService::new(&fs)
            .generate(&request(FeatureKind::Service, "foo"), Path::new("/proj/src/app"))
            .unwrap_err();

        assert!(err.to_string().contains("foo.service.ts already exists"));
    }

    #[test]
    fn dry_run_writes_nothing_but_plans_registration() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new(MODULE_PATH));
        fs.expect_read_file().returning(|_| Ok(MODULE.to_string()));
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let report = GenerateService::new(&fs)
            .with_options(GenerateOptions {
                dry_run: true,
                register: true,
            })
            .generate(&request(FeatureKind::Pipe, "to upper"), Path::new("/proj/src/app"))
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.files, [PathBuf::from("/proj/src/app/to-upper.pipe.ts")]);
        match report.registration {
            RegistrationOutcome::Registered(r) => {
                assert!(r.changed);
                assert!(!r.written);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn registration_can_be_disabled() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let fs = recording_fs(writes.clone());

        let report = GenerateService::new(&fs)
            .with_options(GenerateOptions {
                dry_run: false,
                register: false,
            })
            .generate(&request(FeatureKind::Directive, "bar"), Path::new("/proj/src/app"))
            .unwrap();

        assert!(matches!(report.registration, RegistrationOutcome::Skipped));
        assert_eq!(writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn failed_registration_keeps_generated_files() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let recorded = writes.clone();
        fs.expect_write_file().returning(move |p, _| {
            recorded.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        fs.expect_remove_dir_all().never();

        let report = GenerateService::new(&fs)
            .generate(&request(FeatureKind::Service, "foo"), Path::new("/tmp/elsewhere"))
            .unwrap();

        assert!(report.registration.is_failure());
        if let RegistrationOutcome::Failed(failure) = &report.registration {
            assert_eq!(failure.stage, RegistrationStage::Idle);
        }
        assert_eq!(
            *writes.lock().unwrap(),
            [PathBuf::from("/tmp/elsewhere/foo.service.ts")]
        );
    }
}

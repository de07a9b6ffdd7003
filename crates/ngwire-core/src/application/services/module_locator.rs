//! Finds the `app.module.ts` an artifact should be registered in.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::registration::normalize,
    error::NgwireResult,
};

/// Locations tried relative to the working directory, first match wins.
pub const MODULE_CANDIDATES: [&str; 8] = [
    "./app/app.module.ts",
    "./app.module.ts",
    "../app.module.ts",
    "../../app.module.ts",
    "../../../app.module.ts",
    "../app/app.module.ts",
    "../../app/app.module.ts",
    "../../../app/app.module.ts",
];

pub struct ModuleLocator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ModuleLocator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Candidate paths for `cwd`, in search order.
    pub fn candidates(cwd: &Path) -> impl Iterator<Item = PathBuf> + '_ {
        MODULE_CANDIDATES
            .iter()
            .map(move |candidate| normalize(&cwd.join(candidate)))
    }

    /// First candidate that exists.
    #[instrument(skip(self), fields(cwd = %cwd.display()))]
    pub fn find(&self, cwd: &Path) -> NgwireResult<PathBuf> {
        for candidate in Self::candidates(cwd) {
            if self.filesystem.exists(&candidate) {
                debug!(path = %candidate.display(), "module file found");
                return Ok(candidate);
            }
        }

        Err(ApplicationError::ModuleNotFound {
            searched_from: cwd.to_path_buf(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{application::ports::MockFilesystem, error::NgwireError};

    #[test]
    fn candidates_are_normalized_in_order() {
        let paths: Vec<_> = ModuleLocator::candidates(Path::new("/p/src/app/widgets")).collect();
        assert_eq!(paths[0], PathBuf::from("/p/src/app/widgets/app/app.module.ts"));
        assert_eq!(paths[2], PathBuf::from("/p/src/app/app.module.ts"));
        assert_eq!(paths[7], PathBuf::from("/p/app/app.module.ts"));
    }

    #[test]
    fn first_existing_candidate_wins() {
        let mut fs = MockFilesystem::new();
        // `./app.module.ts` and `../app.module.ts` both exist.
        fs.expect_exists().returning(|p| {
            p == Path::new("/p/src/app.module.ts") || p == Path::new("/p/src/app/app.module.ts")
        });

        let found = ModuleLocator::new(&fs).find(Path::new("/p/src/app")).unwrap();
        assert_eq!(found, PathBuf::from("/p/src/app/app.module.ts"));
    }

    #[test]
    fn nothing_found_is_module_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(MODULE_CANDIDATES.len()).returning(|_| false);

        let err = ModuleLocator::new(&fs).find(Path::new("/p")).unwrap_err();
        assert!(matches!(
            err,
            NgwireError::Application(ApplicationError::ModuleNotFound { .. })
        ));
    }

    #[test]
    fn module_in_app_subdirectory_is_preferred() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/p/src/app/app.module.ts")))
            .return_const(true);

        let found = ModuleLocator::new(&fs).find(Path::new("/p/src")).unwrap();
        assert_eq!(found, PathBuf::from("/p/src/app/app.module.ts"));
    }
}

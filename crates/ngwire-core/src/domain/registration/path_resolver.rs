//! Relative import paths between source files.
//!
//! Purely lexical: nothing here touches the filesystem, so symlinks are not
//! resolved. Both inputs are expected to be absolute (or both relative to
//! the same base).

use std::path::{Component, Path, PathBuf};

/// Extension stripped from import specifiers.
pub const SOURCE_EXTENSION: &str = ".ts";

/// Import specifier for `artifact_path` as seen from a file in `module_dir`.
///
/// Always `/`-separated and always starts with `./` or `../`.
///
/// ```
/// use std::path::Path;
/// use ngwire_core::domain::registration::relative_import_path;
///
/// let spec = relative_import_path(
///     Path::new("/proj/src/app"),
///     Path::new("/proj/src/app/foo/foo.component.ts"),
/// );
/// assert_eq!(spec, "./foo/foo.component");
/// ```
pub fn relative_import_path(module_dir: &Path, artifact_path: &Path) -> String {
    let base = normalize(module_dir);
    let target = normalize(artifact_path);

    let base: Vec<_> = base.components().collect();
    let target: Vec<_> = target.components().collect();

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = base.len() - common;
    let mut segments: Vec<String> = Vec::with_capacity(ups + target.len() - common);
    segments.extend(std::iter::repeat_n("..".to_string(), ups));
    segments.extend(
        target[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let mut joined = segments.join("/");
    if joined.ends_with(SOURCE_EXTENSION) {
        joined.truncate(joined.len() - SOURCE_EXTENSION.len());
    }

    if ups == 0 {
        format!("./{joined}")
    } else {
        joined
    }
}

/// Resolve `.` and `..` components without consulting the filesystem.
///
/// `..` never climbs above the root; leading `..` of a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

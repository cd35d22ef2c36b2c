use std::path::{Path, PathBuf};

use super::error::{ShellError, ShellResult};

/// Joins `name` onto `base` and canonicalizes the result.
///
/// Symlinks are followed and `.`/`..` segments removed, so the returned path
/// always exists at the time of the call.
pub fn resolve(base: &Path, name: &str) -> ShellResult<PathBuf> {
    let joined = base.join(name);
    log::debug!("resolving {} against {}", name, base.display());

    joined
        .canonicalize()
        .map_err(|e| ShellError::from_io(e, name, joined))
}

/// Fails with `OutsideRoot` unless `path` lies under `root`
pub fn confine(path: PathBuf, root: &Path) -> ShellResult<PathBuf> {
    if path.starts_with(root) {
        Ok(path)
    } else {
        Err(ShellError::OutsideRoot {
            path,
            root: root.to_path_buf(),
        })
    }
}

//! File system path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form against `root`.
///
/// Relative paths are joined onto `root`, then `.` and `..` components are
/// collapsed lexically. Symlinks are not resolved, so paths that do not
/// exist yet (build destinations) normalize the same way as existing ones.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use doclinks::utils::path::normalize_path;
/// assert_eq!(
///     normalize_path(Path::new("./public/../out"), Path::new("/site")),
///     PathBuf::from("/site/out")
/// );
/// ```
pub fn normalize_path(path: &Path, root: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    let mut result = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

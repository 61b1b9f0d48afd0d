//! URL path processing utilities.
//!
//! Provides the small pieces the link resolver is built from:
//! - Root-marker normalization of internal links
//! - `{path, hash}` splitting
//! - The `/q/key/value` query convention
//! - Turning destination files into public routes

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Marker anchoring internal links at the content root.
pub const ROOT_MARKER: &str = "~";

/// Separator introducing an embedded `key/value` query pair.
pub const QUERY_SEPARATOR: &str = "/q/";

/// Anchor an internal link at [`ROOT_MARKER`].
///
/// # Examples
/// ```
/// use doclinks::utils::path::route::normalize_internal;
/// assert_eq!(normalize_internal("foo/bar"), "~/foo/bar");
/// assert_eq!(normalize_internal("/foo/bar"), "~/foo/bar");
/// assert_eq!(normalize_internal("~/foo/bar"), "~/foo/bar");
/// ```
pub fn normalize_internal(url: &str) -> Cow<'_, str> {
    if url.starts_with(ROOT_MARKER) {
        Cow::Borrowed(url)
    } else if url.starts_with('/') {
        Cow::Owned(format!("{ROOT_MARKER}{url}"))
    } else {
        Cow::Owned(format!("{ROOT_MARKER}/{url}"))
    }
}

/// A URL split at its first `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    /// Everything before the fragment.
    pub path: &'a str,
    /// The fragment including its leading `#`, or empty.
    pub hash: &'a str,
}

/// Split a URL into path and hash parts.
///
/// # Examples
/// ```
/// use doclinks::utils::path::route::parse_url;
/// let parsed = parse_url("~/about#team");
/// assert_eq!(parsed.path, "~/about");
/// assert_eq!(parsed.hash, "#team");
/// ```
#[inline]
pub fn parse_url(url: &str) -> ParsedUrl<'_> {
    match url.find('#') {
        Some(pos) => ParsedUrl {
            path: &url[..pos],
            hash: &url[pos..],
        },
        None => ParsedUrl { path: url, hash: "" },
    }
}

/// Extract the embedded `/q/key/value` query from a path.
///
/// Returns the real path and the query to reattach (empty if none).
/// Only the first two segments after the separator are kept, a missing
/// value yields `/q/key/`.
///
/// # Examples
/// ```
/// use doclinks::utils::path::route::split_query;
/// assert_eq!(
///     split_query("~/guide/start/q/lang/en"),
///     ("~/guide/start", "/q/lang/en".to_string())
/// );
/// assert_eq!(split_query("~/guide"), ("~/guide", String::new()));
/// ```
pub fn split_query(path: &str) -> (&str, String) {
    let Some((path, rest)) = path.split_once(QUERY_SEPARATOR) else {
        return (path, String::new());
    };

    let mut segments = rest.split('/');
    let key = segments.next().unwrap_or_default();
    let value = segments.next().unwrap_or_default();
    (path, format!("{QUERY_SEPARATOR}{key}/{value}"))
}

/// Turn a destination file into a public route.
///
/// The destination is taken relative to `out_dir`, then the first two
/// segments (locale and version prefix) are dropped.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use doclinks::utils::path::route::route_from_destination;
/// assert_eq!(
///     route_from_destination(Path::new("/site/out"), Path::new("/site/out/a/b/c/page.md")),
///     "/c/page.md"
/// );
/// ```
pub fn route_from_destination(out_dir: &Path, destination: &Path) -> String {
    let relative = relative_path(out_dir, destination);
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .skip(2)
        .collect();
    format!("/{}", segments.join("/"))
}

/// Compute `target` relative to `base`, walking up with `..` when needed.
///
/// Both paths are lexically normalized first; the filesystem is not touched.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = lexical_components(base);
    let target = lexical_components(target);

    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base.len() {
        result.push("..");
    }
    for part in &target[common..] {
        result.push(part);
    }
    result
}

/// Resolve `.` and `..` components without touching the filesystem.
fn lexical_components(path: &Path) -> Vec<Component<'_>> {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts
}

/// Collapse `.`/`..` segments and duplicate slashes of a URL-style path.
///
/// # Examples
/// ```
/// use doclinks::utils::path::route::collapse_segments;
/// assert_eq!(collapse_segments("./guide/../api//start/"), "api/start");
/// ```
pub fn collapse_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(part),
        }
    }
    segments.join("/")
}

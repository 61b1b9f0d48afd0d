//! Site path deduction - mapping authored paths to routes or destinations.
//!
//! The link visitor never knows how the site is laid out. It asks a
//! [`SiteContext`] to deduce where an authored path ends up:
//!
//! ```text
//! Authored path          PathDeduction
//! =============          =============
//! ~/guide/start     ->   route: /docs/guide/start
//! ~/images/logo.png ->   destination: <out_dir>/en/v1/images/logo.png
//! ~/missing         ->   (nothing)
//! ```
//!
//! # Module Structure
//!
//! - [`index`]: [`PathIndex`], an in-memory read-only deduction table
//! - [`site`]: [`Site`], a [`SiteContext`] built from `doclinks.toml`

mod index;
mod site;

use std::path::{Path, PathBuf};

pub use index::PathIndex;
pub use site::Site;

/// Where an authored path ends up in the built site.
///
/// At most one field is used; `route` takes priority. Neither being set is a
/// valid answer meaning "unresolvable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDeduction {
    /// Final public route (e.g., `/docs/guide/start`).
    pub route: Option<String>,
    /// Absolute destination file inside the output directory.
    pub destination_path: Option<PathBuf>,
}

impl PathDeduction {
    pub fn route(route: impl Into<String>) -> Self {
        Self {
            route: Some(route.into()),
            destination_path: None,
        }
    }

    pub fn destination(path: impl Into<PathBuf>) -> Self {
        Self {
            route: None,
            destination_path: Some(path.into()),
        }
    }

    /// Non-empty route, if any.
    pub fn route_str(&self) -> Option<&str> {
        self.route.as_deref().filter(|r| !r.is_empty())
    }

    /// Non-empty destination path, if any.
    pub fn destination_str(&self) -> Option<&Path> {
        self.destination_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Read-only site collaborator consulted by the link visitor.
pub trait SiteContext: Sync {
    /// Deduce the route or destination of an authored, root-anchored path.
    fn resolve_path_deduction(&self, path: &str, src_path: &Path) -> PathDeduction;

    /// Root used to relativize destination paths.
    fn out_dir(&self) -> &Path;
}

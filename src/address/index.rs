//! PathIndex - in-memory table of path deductions.
//!
//! Built once before rewriting, then only read.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use super::PathDeduction;
use crate::utils::path::ROOT_MARKER;
use crate::utils::path::route::collapse_segments;

/// Read-only deduction table keyed by authored path.
///
/// Keys are stored without the root marker and with `.`/`..` segments and
/// trailing slashes collapsed, so `~/guide/./start/` and `guide/start` hit
/// the same entry. Routes win over destinations.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    routes: FxHashMap<String, String>,
    destinations: FxHashMap<String, PathBuf>,
}

impl PathIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a final route for an authored path.
    pub fn insert_route(&mut self, path: &str, route: impl Into<String>) {
        self.routes.insert(index_key(path), route.into());
    }

    /// Register a destination file for an authored path.
    pub fn insert_destination(&mut self, path: &str, destination: impl Into<PathBuf>) {
        self.destinations
            .insert(index_key(path), destination.into());
    }

    /// Builder form of [`insert_route`](Self::insert_route).
    pub fn with_route(mut self, path: &str, route: impl Into<String>) -> Self {
        self.insert_route(path, route);
        self
    }

    /// Builder form of [`insert_destination`](Self::insert_destination).
    pub fn with_destination(mut self, path: &str, destination: impl Into<PathBuf>) -> Self {
        self.insert_destination(path, destination);
        self
    }

    /// Deduce where an authored path ends up.
    ///
    /// A miss returns an empty deduction.
    pub fn lookup(&self, path: &str) -> PathDeduction {
        let key = index_key(path);

        if let Some(route) = self.routes.get(&key) {
            return PathDeduction::route(route.clone());
        }
        if let Some(destination) = self.destinations.get(&key) {
            return PathDeduction::destination(destination.clone());
        }
        PathDeduction::default()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.routes.len() + self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.destinations.is_empty()
    }

    /// Make every relative destination absolute against `root`.
    pub fn anchor_destinations(&mut self, root: &Path) {
        for destination in self.destinations.values_mut() {
            if destination.is_relative() {
                *destination = root.join(&*destination);
            }
        }
    }
}

/// Normalize an authored path into an index key.
fn index_key(path: &str) -> String {
    let path = path.strip_prefix(ROOT_MARKER).unwrap_or(path);
    collapse_segments(path)
}

//! Site - a [`SiteContext`] backed by a [`PathIndex`].

use std::path::{Path, PathBuf};

use super::{PathDeduction, PathIndex, SiteContext};
use crate::config::SiteConfig;
use crate::debug;

/// Output root plus path index, shared read-only by every rewrite.
#[derive(Debug, Clone)]
pub struct Site {
    out_dir: PathBuf,
    index: PathIndex,
}

impl Site {
    pub fn new(out_dir: impl Into<PathBuf>, index: PathIndex) -> Self {
        Self {
            out_dir: out_dir.into(),
            index,
        }
    }

    /// Build a site from a finalized configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.build.out_dir.clone(), config.path_index())
    }

    pub fn index(&self) -> &PathIndex {
        &self.index
    }
}

impl SiteContext for Site {
    fn resolve_path_deduction(&self, path: &str, src_path: &Path) -> PathDeduction {
        let deduction = self.index.lookup(path);
        if deduction.route_str().is_none() && deduction.destination_str().is_none() {
            debug!("link"; "no deduction for `{}` in {}", path, src_path.display());
        }
        deduction
    }

    fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

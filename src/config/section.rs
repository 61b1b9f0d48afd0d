//! `[build]` and `[index]` section definitions.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::PathBuf;

/// `[build]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Output root; destination paths are relativized against it.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

/// `[index]` section: static path deductions.
///
/// ```toml
/// [index.routes]
/// "guide/start" = "/docs/guide/start"
///
/// [index.destinations]
/// "images/logo.png" = "public/en/v1/images/logo.png"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    /// Authored path -> final route.
    #[serde(default)]
    pub routes: FxHashMap<String, String>,

    /// Authored path -> destination file.
    #[serde(default)]
    pub destinations: FxHashMap<String, PathBuf>,
}

//! Site configuration management for `doclinks.toml`.
//!
//! # Sections
//!
//! | Section                | Purpose                                        |
//! |------------------------|------------------------------------------------|
//! | `[build]`              | Output root used to relativize destinations    |
//! | `[index.routes]`       | Authored path -> final route                   |
//! | `[index.destinations]` | Authored path -> destination file              |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{BuildConfig, IndexConfig};
pub use util::find_config_file;

use crate::address::PathIndex;
use crate::cli::Cli;
use crate::utils::path::{expand_tilde, normalize_path};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing doclinks.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Path to the config file, empty when running on defaults (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Static path deductions
    #[serde(default)]
    pub index: IndexConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. Without one, the
    /// defaults are used and cwd becomes the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| cwd.clone(), Path::to_path_buf);

        config.validate()?;
        config.finalize(&root);
        if let Some(out_dir) = &cli.out_dir {
            config.override_out_dir(out_dir, &cwd);
        }
        Ok(config)
    }

    /// Replace `build.out_dir` with a command-line path, resolved against `cwd`.
    pub fn override_out_dir(&mut self, out_dir: &Path, cwd: &Path) {
        self.build.out_dir = normalize_path(&expand_tilde(out_dir), cwd);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}: {}", display_path, fields.join(", "));
    }

    /// Resolve all paths against the project root.
    pub fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.build.out_dir = normalize_path(&expand_tilde(&self.build.out_dir), root);
        for destination in self.index.destinations.values_mut() {
            *destination = normalize_path(&expand_tilde(destination), root);
        }
    }

    /// Build the path index described by `[index]`.
    pub fn path_index(&self) -> PathIndex {
        let mut index = PathIndex::new();
        for (path, route) in &self.index.routes {
            index.insert_route(path, route.clone());
        }
        for (path, destination) in &self.index.destinations {
            index.insert_destination(path, destination.clone());
        }
        index.anchor_destinations(&self.root);
        index
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.build.out_dir.as_os_str().is_empty() {
            errors.push("build.out_dir must not be empty".to_string());
        }

        let mut bad_routes: Vec<_> = self
            .index
            .routes
            .iter()
            .filter(|(_, route)| !route.starts_with('/'))
            .map(|(path, route)| format!("index.routes.\"{path}\" = \"{route}\" must start with `/`"))
            .collect();
        bad_routes.sort();
        errors.extend(bad_routes);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::PathDeduction;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[build\nout_dir = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.build.out_dir, PathBuf::from("public"));
        assert!(config.index.routes.is_empty());
        assert!(config.index.destinations.is_empty());
    }

    #[test]
    fn test_parse_sections() {
        let config = SiteConfig::from_str(
            r#"
            [build]
            out_dir = "dist"

            [index.routes]
            "guide/start" = "/docs/guide/start"

            [index.destinations]
            "images/logo.png" = "dist/en/v1/images/logo.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert_eq!(
            config.index.routes.get("guide/start").map(String::as_str),
            Some("/docs/guide/start")
        );
        assert_eq!(config.index.destinations.len(), 1);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\nout_dir = \"dist\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[build]\nout_dir = \"dist\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let mut config = SiteConfig::from_str(
            r#"
            [build]
            out_dir = "./public"

            [index.destinations]
            "a.png" = "public/en/v1/a.png"
            "b.png" = "/elsewhere/b.png"
            "#,
        )
        .unwrap();
        config.finalize(Path::new("/site"));

        assert_eq!(config.root, PathBuf::from("/site"));
        assert_eq!(config.build.out_dir, PathBuf::from("/site/public"));
        assert_eq!(
            config.index.destinations.get("a.png"),
            Some(&PathBuf::from("/site/public/en/v1/a.png"))
        );
        assert_eq!(
            config.index.destinations.get("b.png"),
            Some(&PathBuf::from("/elsewhere/b.png"))
        );
    }

    #[test]
    fn test_out_dir_override_uses_cwd() {
        let mut config = SiteConfig::from_str("[build]\nout_dir = \"public\"").unwrap();
        config.finalize(Path::new("/site"));

        config.override_out_dir(Path::new("../dist"), Path::new("/site/docs/en"));
        assert_eq!(config.build.out_dir, PathBuf::from("/site/docs/dist"));
        assert_eq!(config.root, PathBuf::from("/site"));

        config.override_out_dir(Path::new("/var/www"), Path::new("/site/docs"));
        assert_eq!(config.build.out_dir, PathBuf::from("/var/www"));
    }

    #[test]
    fn test_path_index_from_config() {
        let mut config = SiteConfig::from_str(
            r#"
            [index.routes]
            "guide/start" = "/docs/guide/start"

            [index.destinations]
            "img/a.png" = "public/en/v1/img/a.png"
            "#,
        )
        .unwrap();
        config.finalize(Path::new("/site"));

        let index = config.path_index();
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.lookup("~/guide/start"),
            PathDeduction::route("/docs/guide/start")
        );
        assert_eq!(
            index.lookup("~/img/a.png"),
            PathDeduction::destination("/site/public/en/v1/img/a.png")
        );
    }

    #[test]
    fn test_validate() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());

        let mut config = SiteConfig::from_str(
            r#"
            [index.routes]
            "a" = "docs/a"
            "b" = "/docs/b"
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("index.routes.\"a\""));
        assert!(!err.contains("index.routes.\"b\""));

        config.index.routes.clear();
        config.build.out_dir = PathBuf::new();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("build.out_dir"));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doclinks.toml");
        fs::write(&path, "[build]\nout_dir = \"site\"\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.build.out_dir, PathBuf::from("site"));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::from_path(&missing),
            Err(ConfigError::Io(_, _))
        ));
    }
}

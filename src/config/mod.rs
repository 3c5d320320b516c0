//! Blog configuration management for `miniblog.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Blog metadata (title)                          |
//! | `[data]`    | Post data file (path or URL)                   |
//! | `[render]`  | Date format, post page name, minification      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//!
//! [data]
//! source = "posts.json"
//!
//! [render]
//! date_format = "%b %-d, %Y"
//! post_page = "post.html"
//! minify = true
//! ```
//!
//! The file is optional: without it every field takes its default.

mod base;
mod data;
pub mod defaults;
mod error;
mod render;

use base::BaseConfig;
use data::DataConfig;
use error::ConfigError;
use render::RenderConfig;

use crate::cli::{Cli, Commands};
use crate::utils::date::is_valid_pattern;
use crate::view::Formatter;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing miniblog.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Root directory (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic blog information
    #[serde(default)]
    pub base: BaseConfig,

    /// Post data settings
    #[serde(default)]
    pub data: DataConfig,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `cli.config` under the CLI root, falling back to defaults when
    /// the file does not exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Display settings for the view-models.
    pub fn formatter(&self) -> Formatter<'_> {
        Formatter {
            date_format: &self.render.date_format,
            post_page: &self.render.post_page,
            site_title: &self.base.title,
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let base = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));

        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };
        self.root = Self::normalize_path(&root);
        self.config_path = Self::normalize_path(&self.root.join(&cli.config));

        if let Commands::Render(args) = &cli.command {
            Self::update_option(&mut self.data.source, args.data.as_ref());
            Self::update_option(&mut self.render.minify, args.minify.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before rendering
    pub fn validate(&self) -> Result<()> {
        if self.data.source.trim().is_empty() {
            bail!(ConfigError::invalid("data.source", "must not be empty"));
        }

        if !is_valid_pattern(&self.render.date_format) {
            bail!(ConfigError::invalid(
                "render.date_format",
                format!("`{}` is not a valid strftime pattern", self.render.date_format),
            ));
        }

        if self.render.post_page.trim().is_empty() {
            bail!(ConfigError::invalid("render.post_page", "must not be empty"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("miniblog").chain(args.iter().copied()))
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.base.title, "Mini GitHub Blog");
        assert_eq!(config.data.source, "posts.json");
        assert_eq!(config.render.date_format, "%b %-d, %Y");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = SiteConfig::from_str("[serve]\nport = 1").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_default_config_round_trips() {
        let content = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        let config = SiteConfig::from_str(&content).unwrap();
        assert_eq!(config.base.title, SiteConfig::default().base.title);
        assert_eq!(config.render.post_page, "post.html");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/miniblog.toml")).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Read(..))));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["--root", root, "render", "index.html"])).unwrap();
        assert_eq!(config.get_root(), dir.path().canonicalize().unwrap());
        assert_eq!(config.data.source, "posts.json");
    }

    #[test]
    fn test_load_reads_file_and_applies_cli() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("miniblog.toml"),
            "[base]\ntitle = \"Notes\"\n[data]\nsource = \"data/posts.json\"\n",
        )
        .unwrap();
        let root = dir.path().to_str().unwrap();

        let config = SiteConfig::load(&cli(&["--root", root, "render", "index.html"])).unwrap();
        assert_eq!(config.base.title, "Notes");
        assert_eq!(config.data.source, "data/posts.json");
        assert!(!config.render.minify);

        let config = SiteConfig::load(&cli(&[
            "--root", root, "render", "index.html", "--data", "https://x.dev/p.json", "--minify",
        ]))
        .unwrap();
        assert_eq!(config.data.source, "https://x.dev/p.json");
        assert!(config.render.minify);
        assert_eq!(config.formatter().site_title, "Notes");
    }

    #[test]
    fn test_init_root_joins_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["--root", root, "init", "blog"])).unwrap();
        assert!(config.get_root().ends_with("blog"));
        assert!(config.config_path.ends_with("blog/miniblog.toml"));
    }

    #[test]
    fn test_validate_rejects_bad_date_format() {
        let config = SiteConfig::from_str("[render]\ndate_format = \"%Q\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[render.date_format]"));
    }

    #[test]
    fn test_validate_rejects_empty_source() {
        let config = SiteConfig::from_str("[data]\nsource = \"  \"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_post_page() {
        let config = SiteConfig::from_str("[render]\npost_page = \"\"").unwrap();
        assert!(config.validate().is_err());
    }
}

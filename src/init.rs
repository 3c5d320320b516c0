//! Blog initialization module.
//!
//! Creates a new blog from the embedded starter pages and a default config.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Starter files written into a new blog
const STARTER_FILES: &[(&str, &str)] = &[
    ("index.html", include_str!("embed/init/index.html")),
    ("post.html", include_str!("embed/init/post.html")),
    ("posts.json", include_str!("embed/init/posts.json")),
];

/// Create a new blog with the starter pages
pub fn new_blog(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if !is_dir_empty(root)? {
        bail!(
            "Directory `{}` is not empty. Use `miniblog init <NAME>` to create in a subdirectory.",
            root.display()
        );
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    init_starter_files(root)?;
    init_default_config(&config.config_path)?;

    log!("init"; "created blog in {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write the starter pages and data file
fn init_starter_files(root: &Path) -> Result<()> {
    for (name, content) in STARTER_FILES {
        let path = root.join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

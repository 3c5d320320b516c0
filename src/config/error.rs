//! Errors raised while loading `miniblog.toml`.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),

    #[error("config file is not valid TOML")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the renderer cannot use
    #[error("[{field}] {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(super) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

//! Error type for registry construction and loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup-time registry failure. Never produced while validating a URL.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot read registry file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed registry data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("registry list `{list}` is empty")]
    Empty { list: &'static str },

    #[error("registry list `{list}` contains a blank entry")]
    BlankEntry { list: &'static str },
}

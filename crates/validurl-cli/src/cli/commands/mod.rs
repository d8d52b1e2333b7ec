//! CLI command handlers. Each command is in its own file.

mod check;
mod config_path;
mod registry;

pub use check::{run_check, CheckOptions};
pub use config_path::run_config_path;
pub use registry::run_registry;

use anyhow::{Context, Result};
use std::path::Path;
use validurl_core::config::ValidatorConfig;
use validurl_core::Registry;

/// Registry from `--registry` if given, else from config (custom path or built-in).
pub(crate) fn load_registry(cfg: &ValidatorConfig, path: Option<&Path>) -> Result<Registry> {
    match path {
        Some(p) => {
            Registry::load_from(p).with_context(|| format!("load registry from {}", p.display()))
        }
        None => cfg.registry(),
    }
}

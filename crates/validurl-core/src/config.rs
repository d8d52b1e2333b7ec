use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::Registry;
use crate::validate::{HostMode, UrlValidator, DEFAULT_MESSAGE};

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

/// Global configuration loaded from `~/.config/validurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Message attached to rejected URLs.
    #[serde(default = "default_message")]
    pub message: String,
    /// Require ASCII letters, digits, `-` and `.` in hosts (strict mode).
    #[serde(default)]
    pub strict_hosts: bool,
    /// Optional registry file replacing the built-in protocol/zone table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            strict_hosts: false,
            registry_path: None,
        }
    }
}

impl ValidatorConfig {
    pub fn host_mode(&self) -> HostMode {
        if self.strict_hosts {
            HostMode::Strict
        } else {
            HostMode::Denylist
        }
    }

    /// Loads the configured registry file, or the built-in table if none is set.
    pub fn registry(&self) -> Result<Registry> {
        match &self.registry_path {
            Some(path) => Registry::load_from(path)
                .with_context(|| format!("load registry from {}", path.display())),
            None => Registry::load_builtin().context("load built-in registry"),
        }
    }

    /// Validator over `registry` using this config's message and host mode.
    pub fn validator<'r>(&self, registry: &'r Registry) -> UrlValidator<'r> {
        UrlValidator::new(registry)
            .with_message(self.message.clone())
            .with_mode(self.host_mode())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("validurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ValidatorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ValidatorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<ValidatorConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ValidatorConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

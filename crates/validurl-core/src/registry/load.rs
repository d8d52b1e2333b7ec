//! Registry loading from TOML (`protocols` and `zones` string arrays).

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{Registry, RegistryError};

/// Registry table compiled into the library.
pub const BUILTIN_DOMAINS: &str = include_str!("../../data/domain.toml");

/// On-disk shape of a registry file.
#[derive(Debug, Deserialize)]
struct DomainFile {
    protocols: Vec<String>,
    zones: Vec<String>,
}

impl Registry {
    /// Parses a registry from TOML text. Both keys are required.
    pub fn from_toml_str(data: &str) -> Result<Self, RegistryError> {
        let file: DomainFile = toml::from_str(data)?;
        Self::new(file.protocols, file.zones)
    }

    /// Loads a registry file from disk.
    pub fn load_from(path: &Path) -> Result<Self, RegistryError> {
        let data = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&data)?;
        tracing::info!(
            "loaded registry from {} ({} protocols, {} zones)",
            path.display(),
            registry.protocol_count(),
            registry.zone_count()
        );
        Ok(registry)
    }

    /// Loads the built-in registry.
    pub fn load_builtin() -> Result<Self, RegistryError> {
        let registry = Self::from_toml_str(BUILTIN_DOMAINS)?;
        tracing::debug!(
            "loaded built-in registry ({} protocols, {} zones)",
            registry.protocol_count(),
            registry.zone_count()
        );
        Ok(registry)
    }
}

//! Zone/protocol registry: the URI schemes and top-level zones a URL may use.
//!
//! Built once (from the embedded `data/domain.toml`, an operator file, or
//! in-memory lists) and read-only afterwards. Entries are stored lowercased;
//! lookups lowercase their input, so membership is case-insensitive.

mod error;
mod load;

pub use error::RegistryError;
pub use load::BUILTIN_DOMAINS;

use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Accepted schemes and top-level zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    protocols: BTreeSet<String>,
    zones: BTreeSet<String>,
}

impl Registry {
    /// Builds a registry from in-memory lists.
    ///
    /// Entries are trimmed and lowercased; duplicates collapse. Fails if
    /// either list is empty or contains a blank entry.
    pub fn new<P, Z>(protocols: P, zones: Z) -> Result<Self, RegistryError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        Z: IntoIterator,
        Z::Item: AsRef<str>,
    {
        Ok(Self {
            protocols: collect_list("protocols", protocols)?,
            zones: collect_list("zones", zones)?,
        })
    }

    /// True if `scheme` (any case) is an accepted protocol.
    pub fn has_protocol(&self, scheme: &str) -> bool {
        self.protocols.contains(&scheme.to_lowercase())
    }

    /// True if `zone` (any case) is an accepted top-level zone.
    pub fn has_zone(&self, zone: &str) -> bool {
        self.zones.contains(&zone.to_lowercase())
    }

    /// Accepted protocols, sorted.
    pub fn protocols(&self) -> impl Iterator<Item = &str> {
        self.protocols.iter().map(String::as_str)
    }

    /// Accepted zones, sorted.
    pub fn zones(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }

    pub fn protocol_count(&self) -> usize {
        self.protocols.len()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }
}

fn collect_list<I>(list: &'static str, items: I) -> Result<BTreeSet<String>, RegistryError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = BTreeSet::new();
    for item in items {
        let entry = item.as_ref().trim();
        if entry.is_empty() {
            return Err(RegistryError::BlankEntry { list });
        }
        set.insert(entry.to_lowercase());
    }
    if set.is_empty() {
        return Err(RegistryError::Empty { list });
    }
    Ok(set)
}

static SHARED: OnceLock<Registry> = OnceLock::new();

/// Process-wide built-in registry, loaded on first use.
///
/// A load failure is returned to the caller and not cached, so the next call
/// tries again. Prefer passing a `Registry` explicitly where practical.
pub fn shared() -> Result<&'static Registry, RegistryError> {
    if let Some(registry) = SHARED.get() {
        return Ok(registry);
    }
    let registry = Registry::load_builtin()?;
    Ok(SHARED.get_or_init(|| registry))
}

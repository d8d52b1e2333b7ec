//! `validurl registry` – show the protocols and zones in effect.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use validurl_core::config::ValidatorConfig;

use super::load_registry;

pub fn run_registry(
    cfg: &ValidatorConfig,
    path: Option<&Path>,
    list_zones: bool,
    out: &mut impl Write,
) -> Result<()> {
    let registry = load_registry(cfg, path)?;
    let protocols: Vec<&str> = registry.protocols().collect();
    writeln!(out, "protocols: {}", protocols.join(", "))?;
    writeln!(out, "zones: {}", registry.zone_count())?;
    if list_zones {
        for zone in registry.zones() {
            writeln!(out, "  {zone}")?;
        }
    }
    Ok(())
}

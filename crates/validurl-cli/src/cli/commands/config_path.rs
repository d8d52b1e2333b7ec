//! `validurl config-path` – print where config.toml lives.

use anyhow::Result;
use std::io::Write;
use validurl_core::config;

pub fn run_config_path(out: &mut impl Write) -> Result<()> {
    let path = config::config_path()?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

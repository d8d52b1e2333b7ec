//! `validurl check <url>...` – validate URLs and report each result.

use anyhow::{bail, Result};
use std::io::Write;
use std::path::PathBuf;
use validurl_core::config::ValidatorConfig;
use validurl_core::HostMode;

use super::load_registry;

/// Flags that override config for a single `check` run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub strict: bool,
    pub message: Option<String>,
    pub registry: Option<PathBuf>,
}

/// Prints `valid` or `invalid: <message>` per URL. Fails if any URL is invalid.
pub fn run_check(
    cfg: &ValidatorConfig,
    opts: &CheckOptions,
    urls: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let registry = load_registry(cfg, opts.registry.as_deref())?;
    let mut validator = cfg.validator(&registry);
    if opts.strict {
        validator = validator.with_mode(HostMode::Strict);
    }
    if let Some(message) = &opts.message {
        validator = validator.with_message(message.clone());
    }

    let mut invalid = 0usize;
    for url in urls {
        match validator.validate(url) {
            Ok(()) => writeln!(out, "{url}: valid")?,
            Err(err) => {
                invalid += 1;
                writeln!(out, "{url}: invalid: {err}")?;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} URLs invalid", urls.len());
    }
    Ok(())
}

//! Host structure checks: characters, length, labels, and IPv4-or-zone.

use std::net::Ipv4Addr;

use crate::registry::Registry;

use super::{HostMode, Rejection};

/// Longest accepted host, in characters.
pub const MAX_HOST_LEN: usize = 253;
/// Longest accepted label, in characters.
pub const MAX_LABEL_LEN: usize = 63;
/// Fewest labels a host may have.
pub const MIN_LABELS: usize = 2;

/// Punctuation and symbols never accepted in a host. Whitespace is rejected
/// separately.
const DISALLOWED: &[char] = &[
    '!', '"', '$', '%', '&', '\'', '(', ')', '*', '+', ',', ':', ';', '<', '=', '>', '?', '@',
    '[', ']', '^', '|', '£', '§', '°', 'ç', '/',
];

/// Runs the host checks in order, stopping at the first failure.
pub(crate) fn check_host(host: &str, registry: &Registry, mode: HostMode) -> Result<(), Rejection> {
    if !has_allowed_characters(host) {
        return Err(Rejection::HostCharacters);
    }
    if mode == HostMode::Strict && !host.chars().all(is_strict_host_char) {
        return Err(Rejection::StrictCharacters);
    }
    if host.chars().count() > MAX_HOST_LEN {
        return Err(Rejection::HostLength);
    }

    let labels: Vec<&str> = host.split('.').collect();
    if !has_valid_labels(&labels) {
        return Err(Rejection::Labels);
    }
    if mode == HostMode::Strict
        && labels
            .iter()
            .any(|label| label.starts_with('-') || label.ends_with('-'))
    {
        return Err(Rejection::StrictHyphen);
    }

    if is_ipv4(host) {
        return Ok(());
    }
    match labels.last() {
        Some(zone) if registry.has_zone(zone) => Ok(()),
        _ => Err(Rejection::Zone),
    }
}

fn has_allowed_characters(host: &str) -> bool {
    !host
        .chars()
        .any(|c| c.is_whitespace() || DISALLOWED.contains(&c))
        && !host.ends_with('.')
}

fn has_valid_labels(labels: &[&str]) -> bool {
    labels.len() >= MIN_LABELS
        && labels
            .iter()
            .all(|label| (1..=MAX_LABEL_LEN).contains(&label.chars().count()))
}

/// Dotted-quad IPv4, four decimal octets without leading zeros.
fn is_ipv4(host: &str) -> bool {
    host.parse::<Ipv4Addr>().is_ok()
}

fn is_strict_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

//! Structural URL validation.
//!
//! A candidate is accepted when, after defaulting a missing scheme to
//! `http://`, everything before its query and fragment parses as an absolute
//! IRI whose scheme is a registry protocol, whose host passes the character,
//! length and label checks and is either an IPv4 literal or ends in a registry
//! zone, and whose path holds no whitespace. No network access is performed.

mod error;
mod host;
mod normalize;
mod parse;

pub use error::{ErrorKind, InvalidUrl, DEFAULT_MESSAGE};
pub use host::{MAX_HOST_LEN, MAX_LABEL_LEN, MIN_LABELS};
pub use normalize::{ensure_scheme, DEFAULT_SCHEME_PREFIX};

use std::fmt;

use crate::registry::Registry;

/// How host characters are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostMode {
    /// Reject only the listed punctuation/symbols and whitespace.
    #[default]
    Denylist,
    /// Additionally require ASCII letters, digits, `-` and `.`, with no label
    /// starting or ending in `-`.
    Strict,
}

/// The check that rejected a candidate. Logged, never returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    Parse,
    Scheme,
    MissingHost,
    HostCharacters,
    StrictCharacters,
    HostLength,
    Labels,
    StrictHyphen,
    Zone,
    Path,
}

impl Rejection {
    fn as_str(self) -> &'static str {
        match self {
            Rejection::Parse => "unparseable",
            Rejection::Scheme => "scheme not accepted",
            Rejection::MissingHost => "missing host",
            Rejection::HostCharacters => "disallowed host character",
            Rejection::StrictCharacters => "host character outside strict set",
            Rejection::HostLength => "host too long",
            Rejection::Labels => "bad label count or length",
            Rejection::StrictHyphen => "label starts or ends with hyphen",
            Rejection::Zone => "neither IPv4 nor known zone",
            Rejection::Path => "whitespace in path",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates `candidate` against `registry` with the default message and
/// host mode.
///
/// # Examples
///
/// - `validate("example.com", &registry)` → `Ok(())`
/// - `validate("http://example", &registry)` → `Err(InvalidUrl)` (one label)
/// - `validate("http://192.168.0.1", &registry)` → `Ok(())`
pub fn validate(candidate: &str, registry: &Registry) -> Result<(), InvalidUrl> {
    UrlValidator::new(registry).validate(candidate)
}

/// Validator bound to a registry, failure message and host mode.
#[derive(Debug, Clone)]
pub struct UrlValidator<'r> {
    registry: &'r Registry,
    message: String,
    mode: HostMode,
}

impl<'r> UrlValidator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            message: DEFAULT_MESSAGE.to_string(),
            mode: HostMode::default(),
        }
    }

    /// Replaces the message carried by `InvalidUrl`.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_mode(mut self, mode: HostMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn mode(&self) -> HostMode {
        self.mode
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn validate(&self, candidate: &str) -> Result<(), InvalidUrl> {
        check(candidate, self.registry, self.mode).map_err(|rejection| {
            tracing::debug!(candidate, reason = %rejection, "rejected URL");
            InvalidUrl::new(self.message.clone())
        })
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}

fn check(candidate: &str, registry: &Registry, mode: HostMode) -> Result<(), Rejection> {
    let normalized = ensure_scheme(candidate);
    let parts = parse::split(&normalized).ok_or(Rejection::Parse)?;

    if !registry.has_protocol(parts.scheme) {
        return Err(Rejection::Scheme);
    }

    let host = parts
        .host
        .filter(|h| !h.is_empty())
        .ok_or(Rejection::MissingHost)?;
    host::check_host(host, registry, mode)?;

    if parts.path.chars().any(char::is_whitespace) {
        return Err(Rejection::Path);
    }
    Ok(())
}

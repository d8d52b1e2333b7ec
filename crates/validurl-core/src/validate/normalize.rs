//! Default scheme for candidates typed without one.

use std::borrow::Cow;

/// Prefix added to candidates that lack an HTTP(S) scheme.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

const HTTP_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Returns `candidate` unchanged if it starts with `http://` or `https://`
/// (ASCII case-insensitive), otherwise `http://` + `candidate`.
///
/// Only the literal prefix is checked: `ftp://host` becomes
/// `http://ftp://host`, whose host parses as the single label `ftp` and
/// fails the label-count check.
pub fn ensure_scheme(candidate: &str) -> Cow<'_, str> {
    if has_http_prefix(candidate) {
        Cow::Borrowed(candidate)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{candidate}"))
    }
}

fn has_http_prefix(candidate: &str) -> bool {
    HTTP_PREFIXES.iter().any(|prefix| {
        candidate
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

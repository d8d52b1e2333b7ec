//! Generic-syntax decomposition of a normalized candidate.

use iri_string::types::IriStr;

/// Components the structural checks look at. Query and fragment are cut off
/// before parsing and never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub scheme: &'a str,
    pub host: Option<&'a str>,
    pub path: &'a str,
}

/// Splits `normalized` per RFC 3987 (RFC 3986 extended to non-ASCII).
///
/// Only scheme, authority and path go through the grammar; everything from
/// the first `?` or `#` on is dropped. No normalization happens: case,
/// percent-encoding and dots are left as written. Returns `None` if the
/// remainder is not an absolute IRI.
pub(crate) fn split(normalized: &str) -> Option<Components<'_>> {
    let iri = IriStr::new(without_query_and_fragment(normalized)).ok()?;
    let host = iri.authority_components().map(|authority| authority.host());
    Some(Components {
        scheme: iri.scheme_str(),
        host,
        path: iri.path_str(),
    })
}

fn without_query_and_fragment(normalized: &str) -> &str {
    match normalized.find(|c| c == '?' || c == '#') {
        Some(end) => &normalized[..end],
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_scheme_host_path() {
        let c = split("http://user@Example.COM:8080/a/b?q=1#frag").unwrap();
        assert_eq!(c.scheme, "http");
        assert_eq!(c.host, Some("Example.COM"));
        assert_eq!(c.path, "/a/b");
    }

    #[test]
    fn empty_host_and_path() {
        let c = split("http://").unwrap();
        assert_eq!(c.host, Some(""));
        assert_eq!(c.path, "");
    }

    #[test]
    fn embedded_scheme_lands_in_authority() {
        let c = split("http://ftp://example.com").unwrap();
        assert_eq!(c.scheme, "http");
        assert_eq!(c.host, Some("ftp"));
        assert_eq!(c.path, "//example.com");
    }

    #[test]
    fn keeps_non_ascii_and_sub_delims_in_host() {
        assert_eq!(split("http://ex£mple.com").unwrap().host, Some("ex£mple.com"));
        assert_eq!(split("http://a!b.com").unwrap().host, Some("a!b.com"));
        assert_eq!(split("http://a%41.com").unwrap().host, Some("a%41.com"));
    }

    #[test]
    fn query_and_fragment_not_parsed() {
        for url in [
            "http://example.com/?q=a|b",
            "http://example.com/?q={x}",
            "http://example.com/?q=a b",
            "http://example.com/?q=100%",
            "http://example.com/#frag ment",
            "http://example.com/#a#b",
        ] {
            let c = split(url).unwrap();
            assert_eq!(c.host, Some("example.com"), "{url}");
            assert_eq!(c.path, "/", "{url}");
        }
        assert_eq!(split("http://example.com/path?q=[1]").unwrap().path, "/path");
    }

    #[test]
    fn question_mark_ends_authority() {
        let c = split("http://exa?mple.com").unwrap();
        assert_eq!(c.host, Some("exa"));
        assert_eq!(c.path, "");
    }

    #[test]
    fn rejects_grammar_violations() {
        assert!(split("http://exam ple.com").is_none());
        assert!(split("http://example.com/a b").is_none());
        assert!(split("http://example.com/%zz").is_none());
        assert!(split("http://exa\"mple.com").is_none());
        assert!(split("http://[::1").is_none());
    }
}

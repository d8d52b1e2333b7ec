//! Integration test: public API against the built-in registry and an injected one.
//!
//! Covers the documented accept/reject scenarios, the host and label length
//! boundaries, and a registry loaded from a file on disk.

use std::io::Write;

use validurl_core::registry::{self, Registry};
use validurl_core::validate::{ensure_scheme, MAX_HOST_LEN, MAX_LABEL_LEN};
use validurl_core::{validate, validate_field, FieldErrors, HostMode, UrlValidator};

fn host_of_len(len: usize) -> String {
    // Fill with 63-char labels, then a shorter one, ending in ".com".
    let mut labels = Vec::new();
    let mut remaining = len - ".com".len();
    while remaining > 0 {
        let take = remaining.min(MAX_LABEL_LEN);
        labels.push("a".repeat(take));
        remaining -= take;
        if remaining > 0 {
            remaining -= 1;
        }
    }
    let host = format!("{}.com", labels.join("."));
    assert_eq!(host.len(), len);
    host
}

#[test]
fn documented_scenarios() {
    let registry = registry::shared().unwrap();
    assert!(validate("example.com", registry).is_ok());
    assert!(validate("http://example", registry).is_err());
    assert!(validate("http://example.com/a b", registry).is_err());
    assert!(validate("ftp://example.com", registry).is_err());
    assert!(validate("http://exam ple.com", registry).is_err());
    assert!(validate("http://192.168.0.1", registry).is_ok());
}

#[test]
fn normalization_prefix_rules() {
    assert_eq!(ensure_scheme("HTTPS://example.com"), "HTTPS://example.com");
    assert_eq!(ensure_scheme("example.com"), "http://example.com");
    assert_eq!(ensure_scheme("ftp://example.com"), "http://ftp://example.com");
}

#[test]
fn host_length_boundary() {
    let registry = Registry::load_builtin().unwrap();
    let ok = host_of_len(MAX_HOST_LEN);
    let long = host_of_len(MAX_HOST_LEN + 1);
    assert!(validate(&format!("http://{ok}"), &registry).is_ok());
    assert!(validate(&format!("http://{long}"), &registry).is_err());
}

#[test]
fn label_length_boundary_with_other_labels_fixed() {
    let registry = Registry::load_builtin().unwrap();
    let ok = format!("https://www.{}.example.com/", "x".repeat(MAX_LABEL_LEN));
    let long = format!("https://www.{}.example.com/", "x".repeat(MAX_LABEL_LEN + 1));
    assert!(validate(&ok, &registry).is_ok());
    assert!(validate(&long, &registry).is_err());
}

#[test]
fn injected_registry_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"protocols = [\"HTTPS\"]\nzones = [\"Internal\"]\n")
        .unwrap();
    f.flush().unwrap();
    let registry = Registry::load_from(f.path()).unwrap();

    assert!(validate("https://wiki.corp.internal/page", &registry).is_ok());
    assert!(validate("wiki.corp.internal", &registry).is_err());
    assert!(validate("https://example.com", &registry).is_err());
    assert!(validate("https://172.16.0.1", &registry).is_ok());
}

#[test]
fn form_style_reporting() {
    let registry = Registry::load_builtin().unwrap();
    let validator = UrlValidator::new(&registry)
        .with_mode(HostMode::Strict)
        .with_message("is not a valid website");
    let mut errors = FieldErrors::new();

    let _ = validate_field(&mut errors, "website", "https://my-site.example.org", &validator);
    let _ = validate_field(&mut errors, "mirror", "https://my_site.example.org", &validator);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("mirror"),
        Some(&["is not a valid website".to_string()][..])
    );
}

#[test]
fn validation_across_threads() {
    let registry = registry::shared().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let url = format!("https://host{i}.example.net/x");
                validate(&url, registry).is_ok()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

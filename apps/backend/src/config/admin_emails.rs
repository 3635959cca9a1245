//! `ADMIN_EMAILS`: comma-separated patterns whose users are flagged admin on
//! account creation and login.
//!
//! Patterns are exact addresses or `*` globs (`*@example.com`,
//! `ops@*.example.com`). Matching is case-insensitive after NFKC
//! normalization, the same normalization applied to stored emails.

use std::env;

use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEmails {
    patterns: Vec<String>,
}

/// Trim, NFKC-normalize and lowercase an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().nfkc().collect::<String>().to_lowercase()
}

impl AdminEmails {
    /// `None` when the list is empty (nobody is promoted automatically).
    pub fn parse(raw: &str) -> Option<Self> {
        let patterns: Vec<String> = raw
            .split(',')
            .map(normalize_email)
            .filter(|p| !p.is_empty())
            .collect();
        (!patterns.is_empty()).then_some(Self { patterns })
    }

    pub fn from_env() -> Option<Self> {
        Self::parse(&env::var("ADMIN_EMAILS").ok()?)
    }

    pub fn matches(&self, email: &str) -> bool {
        let email = normalize_email(email);
        self.patterns.iter().any(|p| glob_match(&email, p))
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

/// `*` matches any (possibly empty) run of characters.
fn glob_match(text: &str, pattern: &str) -> bool {
    let segments: Vec<&str> = pattern.split('*').collect();
    let [first, middle @ .., last] = segments.as_slice() else {
        // no '*' at all
        return text == pattern;
    };

    if text.len() < first.len() + last.len() || !text.starts_with(first) || !text.ends_with(last)
    {
        return false;
    }
    let mut rest = &text[first.len()..text.len() - last.len()];
    for seg in middle {
        match rest.find(seg) {
            Some(pos) => rest = &rest[pos + seg.len()..],
            None => return false,
        }
    }
    true
}

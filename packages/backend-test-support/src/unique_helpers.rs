//! Unique test data so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// assert_ne!(a, unique_str("user"));
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@example.test`
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("test");
/// assert!(email.starts_with("test-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}

/// Five random uppercase ASCII letters drawn from a fresh ULID's entropy.
///
/// ```
/// use backend_test_support::unique_helpers::unique_word;
///
/// let w = unique_word();
/// assert_eq!(w.len(), 5);
/// assert!(w.bytes().all(|b| b.is_ascii_uppercase()));
/// ```
pub fn unique_word() -> String {
    let mut bits = Ulid::new().random();
    (0..5)
        .map(|_| {
            let letter = b'A' + (bits % 26) as u8;
            bits /= 26;
            letter as char
        })
        .collect()
}

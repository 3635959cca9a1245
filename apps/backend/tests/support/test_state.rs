//! Fresh, migrated, in-memory state per test.

use backend::domain::RoundRules;
use backend::infra::state::build_state;
use backend::{AdminEmails, AppError, AppState, SecurityConfig};

pub const TEST_SEED: u64 = 0x5EED;

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(b"guessword-integration-secret".to_vec())
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with(RoundRules::default(), None).await
}

pub async fn build_test_state_with(
    rules: RoundRules,
    admin_emails: Option<&str>,
) -> Result<AppState, AppError> {
    build_state()
        .with_security(test_security())
        .with_rules(rules)
        .with_rng_seed(TEST_SEED)
        .with_admin_emails(admin_emails.and_then(AdminEmails::parse))
        .build()
        .await
}

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_orm::DatabaseConnection;

use super::round_store::RoundStore;
use super::security_config::SecurityConfig;
use crate::config::admin_emails::AdminEmails;
use crate::domain::RoundRules;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    pub rules: RoundRules,
    /// Open rounds, one slot per player
    pub rounds: RoundStore,
    /// Secret-word picker; seeded in tests for reproducible rounds
    pub rng: Arc<Mutex<ChaCha8Rng>>,
    pub admin_emails: Option<Arc<AdminEmails>>,
}

impl AppState {
    /// Create a new AppState with the given database connection and security config
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db,
            security,
            rules: RoundRules::default(),
            rounds: RoundStore::default(),
            rng: Arc::new(Mutex::new(ChaCha8Rng::from_os_rng())),
            admin_emails: None,
        }
    }

    pub fn with_rules(mut self, rules: RoundRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed)));
        self
    }

    pub fn with_admin_emails(mut self, admin_emails: Option<AdminEmails>) -> Self {
        self.admin_emails = admin_emails.map(Arc::new);
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

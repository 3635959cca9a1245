use db_infra::db::{validate_db_config, DbKind, DbOwner, RuntimeEnv};
use db_infra::{build_admin_pool, connect, orchestrate_migration_internal};
use migration::MigrationCommand;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::admin_emails::AdminEmails;
use crate::domain::RoundRules;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: DbKind,
    security_config: SecurityConfig,
    rules: RoundRules,
    rng_seed: Option<u64>,
    admin_emails: Option<AdminEmails>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Test,
            db_kind: DbKind::SqliteMemory,
            security_config: SecurityConfig::default(),
            rules: RoundRules::default(),
            rng_seed: None,
            admin_emails: None,
        }
    }
    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }
    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = db_kind;
        self
    }
    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }
    pub fn with_rules(mut self, rules: RoundRules) -> Self {
        self.rules = rules;
        self
    }
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
    pub fn with_admin_emails(mut self, admin_emails: Option<AdminEmails>) -> Self {
        self.admin_emails = admin_emails;
        self
    }

    /// Connect, bring the schema up to date and assemble the state.
    pub async fn build(self) -> Result<AppState, AppError> {
        validate_db_config(self.env, self.db_kind)?;
        let conn = bootstrap_db(self.env, self.db_kind).await?;

        let mut state = AppState::new(conn, self.security_config)
            .with_rules(self.rules)
            .with_admin_emails(self.admin_emails);
        if let Some(seed) = self.rng_seed {
            state = state.with_rng_seed(seed);
        }
        info!(
            env = ?self.env,
            db_kind = ?self.db_kind,
            max_attempts = self.rules.max_attempts,
            daily_rounds = self.rules.daily_rounds,
            "state=ready"
        );
        Ok(state)
    }
}

/// Sqlite migrates on the app pool itself (an in-memory database lives and
/// dies with its one connection); postgres migrates through an owner pool.
async fn bootstrap_db(env: RuntimeEnv, db_kind: DbKind) -> Result<DatabaseConnection, AppError> {
    match db_kind {
        DbKind::SqliteMemory | DbKind::SqliteFile => {
            let conn = connect(env, db_kind, DbOwner::App).await?;
            orchestrate_migration_internal(&conn, env, db_kind, MigrationCommand::Up).await?;
            Ok(conn)
        }
        DbKind::Postgres => {
            let admin = build_admin_pool(env, db_kind).await?;
            orchestrate_migration_internal(&admin, env, db_kind, MigrationCommand::Up).await?;
            admin.close().await?;
            Ok(connect(env, db_kind, DbOwner::App).await?)
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

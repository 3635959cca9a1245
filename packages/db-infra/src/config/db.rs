use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use sea_orm::DatabaseBackend;

use crate::error::DbInfraError;

/// Which environment a connection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test profile enforces the `_test` database-name suffix.
    Test,
}

/// Storage engine behind the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

/// Database role used for the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

impl FromStr for RuntimeEnv {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(Self::Prod),
            "test" => Ok(Self::Test),
            other => Err(DbInfraError::config(format!(
                "unknown runtime env '{other}' (expected prod|test)"
            ))),
        }
    }
}

impl FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "sqlite" | "sqlite-file" | "sqlite_file" => Ok(Self::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(DbInfraError::config(format!(
                "unknown db kind '{other}' (expected postgres|sqlite-file|sqlite-memory)"
            ))),
        }
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

impl DbKind {
    /// `DB_KIND` from the environment, defaulting to Postgres.
    pub fn from_env() -> Result<Self, DbInfraError> {
        match env::var("DB_KIND") {
            Ok(v) if !v.trim().is_empty() => v.parse(),
            _ => Ok(Self::Postgres),
        }
    }
}

/// Rejects combinations that could point tests at a real database.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    if env == RuntimeEnv::Prod && db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "in-memory sqlite is only allowed for the test profile",
        ));
    }
    Ok(())
}

/// Build the connection string for the given profile, engine and role.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    validate_db_config(env, db_kind)?;
    match db_kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let (user, password) = credentials(owner)?;
            let user = utf8_percent_encode(&user, NON_ALPHANUMERIC);
            let password = utf8_percent_encode(&password, NON_ALPHANUMERIC);
            Ok(format!(
                "postgresql://{user}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_file_path(env)?;
            Ok(format!("sqlite://{}?mode=rwc", path.display()))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Location of the sqlite database file: `$SQLITE_DB_DIR/<db name>.db`.
pub fn sqlite_file_path(env: RuntimeEnv) -> Result<PathBuf, DbInfraError> {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data/sqlite".to_string());
    let name = db_name(env)?;
    Ok(PathBuf::from(dir).join(format!("{name}.db")))
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let name = must_var("TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{name}'"
                )));
            }
            Ok(name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("GUESSWORD_OWNER_USER")?,
            must_var("GUESSWORD_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}

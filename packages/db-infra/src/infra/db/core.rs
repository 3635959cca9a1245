use std::future::Future;
use std::path::Path;
use std::time::Duration;

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use rand::Rng;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use tracing::{info, trace, warn};

use crate::config::db::{
    make_conn_spec, sqlite_file_path, validate_db_config, DbKind, DbOwner, RuntimeEnv,
};
use crate::error::DbInfraError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                let jitter_ms = rand::rng().random_range(0..interval_ms / 4 + 1);
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms + jitter_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(url: &str, db_kind: DbKind, max_connections: u32) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);
    match db_kind {
        // every connection to sqlite::memory: is a separate database
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.min_connections(1).max_connections(max_connections.min(4));
        }
        DbKind::Postgres => {
            opt.min_connections(1).max_connections(max_connections);
        }
    }
    opt
}

/// Open a pool for the given profile, engine and role.
///
/// Postgres connections are retried with jitter; sqlite file databases get
/// their parent directory created and WAL mode enabled.
pub async fn connect(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, owner)?;
    info!(env = ?env, db_kind = ?db_kind, owner = ?owner, url = %sanitize_db_url(&url), "db=connect");

    if db_kind == DbKind::SqliteFile {
        ensure_sqlite_dir(&sqlite_file_path(env)?)?;
    }

    let opt = connect_options(&url, db_kind, 10);
    let conn = match db_kind {
        DbKind::Postgres => {
            retry_connection(
                || {
                    let opt = opt.clone();
                    async move {
                        Database::connect(opt)
                            .await
                            .map_err(|e| DbInfraError::Connect {
                                message: format!("failed to connect to Postgres: {e}"),
                            })
                    }
                },
                CONNECT_ATTEMPTS,
                CONNECT_INTERVAL_MS,
            )
            .await?
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            Database::connect(opt)
                .await
                .map_err(|e| DbInfraError::Connect {
                    message: format!("failed to open sqlite database: {e}"),
                })?
        }
    };

    if db_kind == DbKind::SqliteFile {
        apply_sqlite_file_pragmas(&conn).await?;
    }
    Ok(conn)
}

/// Single-connection owner pool used to run migrations.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    connect(env, db_kind, DbOwner::Owner).await
}

fn ensure_sqlite_dir(path: &Path) -> Result<(), DbInfraError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            DbInfraError::config(format!(
                "failed to create sqlite directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

async fn apply_sqlite_file_pragmas(conn: &DatabaseConnection) -> Result<(), DbInfraError> {
    for pragma in ["PRAGMA journal_mode = WAL;", "PRAGMA synchronous = NORMAL;"] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::Connect {
                message: format!("failed to apply '{pragma}': {e}"),
            })?;
    }
    Ok(())
}

/// Mask the password in a connection string so it can be logged.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth, host)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    let Some((scheme, creds)) = auth.split_once("://") else {
        return url.to_string();
    };
    match creds.split_once(':') {
        Some((user, _password)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

/// True when every defined migration is applied and the newest names match.
async fn schema_up_to_date(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_count = Migrator::migrations().len();
    let expected_last = Migrator::migrations().last().map(|m| m.name().to_string());

    let applied = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => migrations,
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::Migration {
                message: format!("failed to read applied migrations: {e}"),
            })
        }
    };
    let applied_last = applied.last().map(|m| m.name().to_string());

    let up_to_date = applied.len() == expected_count && applied_last == expected_last;
    trace!(
        fastpath = if up_to_date { "hit" } else { "miss" },
        applied_count = applied.len(),
        expected_count
    );
    Ok(up_to_date)
}

/// Connect as owner and run a migration command.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    validate_db_config(env, db_kind)?;
    let admin_pool = build_admin_pool(env, db_kind).await?;
    orchestrate_migration_internal(&admin_pool, env, db_kind, command).await
}

/// Run a migration command on an existing pool and verify the result.
///
/// `Up` is skipped when the schema is already current.
pub async fn orchestrate_migration_internal(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    info!(env = ?env, db_kind = ?db_kind, cmd = ?command, "migrate=start");

    if command == MigrationCommand::Up && schema_up_to_date(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })?;

    let expected = Migrator::migrations().len();
    let applied = migration::count_applied_migrations(pool)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("failed to count applied migrations: {e}"),
        })?;

    match command {
        MigrationCommand::Reset if applied != 0 => {
            return Err(DbInfraError::Migration {
                message: format!(
                    "reset should leave 0 migrations applied, but {applied} were found"
                ),
            });
        }
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
            if applied != expected =>
        {
            return Err(DbInfraError::Migration {
                message: format!("expected {expected} migrations, but {applied} were applied"),
            });
        }
        _ => {}
    }

    info!(applied, expected, "migrate=done");
    Ok(())
}

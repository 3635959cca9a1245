pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};
pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};

mod m20250901_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl MigrationCommand {
    fn mutates_schema(self) -> bool {
        !matches!(self, Self::Status)
    }
}

/// Run one migration command against an already-open connection.
/// Shared by the migration CLI and the test bootstrap.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = describe(db).await?;
    tracing::info!(
        cmd = ?command,
        backend = %before.backend,
        db = %before.name,
        defined = before.defined,
        applied = before.applied,
        "migration starting"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    if let Err(e) = result {
        tracing::error!(cmd = ?command, backend = %before.backend, error = %e, "migration failed");
        return Err(e);
    }

    if command.mutates_schema() {
        let applied = count_applied_migrations(db).await?;
        tracing::info!(cmd = ?command, applied, "migration finished");
    }
    Ok(())
}

struct DbDescription {
    backend: String,
    name: String,
    defined: usize,
    applied: usize,
}

async fn describe(db: &DatabaseConnection) -> Result<DbDescription, DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => Some("select current_database() as name"),
        DatabaseBackend::Sqlite => {
            Some("SELECT file AS name FROM pragma_database_list WHERE name = 'main'")
        }
        _ => None,
    };

    let name = match sql {
        Some(sql) => {
            let row = db
                .query_one(Statement::from_string(backend, sql.to_string()))
                .await?;
            match row.and_then(|r| r.try_get::<String>("", "name").ok()) {
                // sqlite reports an empty file name for in-memory databases
                Some(n) if n.is_empty() => ":memory:".to_string(),
                Some(n) => n,
                None => "<unknown>".to_string(),
            }
        }
        None => "<unsupported>".to_string(),
    };

    Ok(DbDescription {
        backend: format!("{backend:?}"),
        name,
        defined: Migrator::migrations().len(),
        applied: count_applied_migrations(db).await.unwrap_or(0),
    })
}

/// Number of applied migrations; 0 when the bookkeeping table does not exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the newest applied migration, if any.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

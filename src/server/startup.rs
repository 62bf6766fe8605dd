use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and verifies its schema is current.
///
/// Migrations are never applied here. They are run out of band with the
/// `migration` binary, and the server refuses to start until they are.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with an up to date schema
/// - `Err(AppError::DbErr)` - Failed to connect
/// - `Err(AppError::ConfigErr)` - Migrations are pending
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    ensure_schema_is_current(&db).await?;

    Ok(db)
}

/// Fails with `ConfigError::PendingMigrations` if any migration has not been
/// applied.
pub async fn ensure_schema_is_current(db: &DatabaseConnection) -> Result<(), AppError> {
    let pending: Vec<String> = Migrator::get_pending_migrations(db)
        .await?
        .iter()
        .map(|migration| migration.name().to_string())
        .collect();

    if !pending.is_empty() {
        return Err(ConfigError::PendingMigrations(pending).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;

    use super::*;

    /// Tests the schema check against a database that was never migrated.
    ///
    /// Expected: Err(PendingMigrations) naming every migration
    #[tokio::test]
    async fn refuses_unmigrated_database() -> Result<(), AppError> {
        let db = Database::connect("sqlite::memory:").await?;

        let result = ensure_schema_is_current(&db).await;

        match result {
            Err(AppError::ConfigErr(ConfigError::PendingMigrations(names))) => {
                assert_eq!(names.len(), Migrator::migrations().len());
            }
            other => panic!("expected pending migrations, got {:?}", other),
        }

        Ok(())
    }

    /// Tests the schema check after every migration has been applied.
    ///
    /// Expected: Ok(())
    #[tokio::test]
    async fn accepts_migrated_database() -> Result<(), AppError> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;

        ensure_schema_is_current(&db).await?;

        Ok(())
    }
}

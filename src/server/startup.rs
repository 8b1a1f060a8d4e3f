use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    storage::{local::LocalFileStorage, FileStorage},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready, migrations applied");

    Ok(db)
}

/// Creates the local file storage rooted at the configured directory.
///
/// Files are served back by the router under `/files`, so URLs are built from
/// `APP_URL` plus that prefix.
///
/// # Returns
/// - `Ok(Arc<dyn FileStorage>)` - Storage with its root directory created
/// - `Err(AppError::StorageErr)` - Failed to create the root directory
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn FileStorage>, AppError> {
    let storage = LocalFileStorage::new(
        &config.storage_dir,
        format!("{}/files", config.app_url),
    );
    storage.ensure_root().await?;

    Ok(Arc::new(storage))
}

use time::Duration;
use tower_sessions::{cookie::Key, service::SignedCookie, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, middleware::session::SESSION_COOKIE};

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
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database as application data; the store's
/// table is created if missing.
///
/// # Arguments
/// - `db` - Connected database whose pool the session store shares
/// - `config` - Application configuration with cookie key and session lifetime
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to mount on the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(session_layer(
        store,
        config.session_key.clone(),
        config.session_ttl_secs,
        config.secure_cookies,
    ))
}

/// Builds the signed-cookie session layer over an existing store.
///
/// The cookie is HttpOnly and expires after `ttl_secs` of inactivity.
pub fn session_layer(
    store: SqliteStore,
    key: Key,
    ttl_secs: i64,
    secure: bool,
) -> SessionManagerLayer<SqliteStore, SignedCookie> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(ttl_secs)))
        .with_signed(key)
}

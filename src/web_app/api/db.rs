// web_app/api/db.rs - Database connection pool setup
//
// The server stores one pool globally so server functions can reach it
// without threading it through every request. Tests may override it.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Mutex;
use std::sync::OnceLock;

use super::config::ServerConfig;

static POOL: OnceLock<PgPool> = OnceLock::new();
static TEST_POOL_OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);
static MEDIA_BASE: OnceLock<Option<String>> = OnceLock::new();

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    tracing::info!("Initializing global database pool");
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized successfully");
    }
}

/// Set a pool override for testing
pub fn set_test_pool(pool: PgPool) {
    let mut guard = TEST_POOL_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(pool);
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    {
        let guard = TEST_POOL_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref pool) = *guard {
            return Some(pool.clone());
        }
    }

    let pool = POOL.get().cloned();
    if pool.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    pool
}

/// Record where relative media paths are served from
pub fn init_media_base(base: Option<String>) {
    if MEDIA_BASE.set(base).is_err() {
        tracing::warn!("Media base URL already initialized");
    }
}

pub fn media_base() -> Option<&'static str> {
    MEDIA_BASE.get().and_then(|base| base.as_deref())
}

/// Create a PostgreSQL connection pool from the server configuration
pub async fn create_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Apply the schema DDL; safe to run on every start
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(super::SCHEMA_SQL).execute(pool).await?;
    tracing::info!("Schema up to date");
    Ok(())
}

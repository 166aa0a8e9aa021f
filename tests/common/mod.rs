// common/mod.rs - Shared test utilities for database setup and teardown
//
// Every database test works on the `store` schema, so tests take a
// process-wide lock, rebuild the schema from the catalog fixture, run,
// and drop it again. This keeps runs idempotent and ids predictable.

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

use leptos::prelude::*;
use storefront::fixtures::tables::CatalogTables;
use storefront::fixtures::TestTable;
use storefront::web_app::api::session::SessionUser;

static STORE_LOCK: Mutex<()> = Mutex::const_new(());

/// Serialize access to the store schema across tests in one binary
pub async fn lock() -> MutexGuard<'static, ()> {
    STORE_LOCK.lock().await
}

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Drop the store schema with every table in it
pub async fn teardown_store(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query("DROP SCHEMA IF EXISTS store CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Rebuild the store schema and load the catalog fixture
pub async fn setup_store(pool: &PgPool) -> anyhow::Result<()> {
    teardown_store(pool).await?;
    for sql in CatalogTables::setup_sql() {
        sqlx::raw_sql(sql).execute(pool).await?;
    }
    Ok(())
}

/// Full setup and teardown wrapper around a test body
pub async fn with_store<F, Fut>(test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    let _guard = lock().await;
    let pool = create_test_pool().await?;

    setup_store(&pool).await?;
    let result = test_fn(pool.clone()).await;

    // Always cleanup, even if test fails
    teardown_store(&pool).await?;

    result
}

/// Make `user_id` the signed-in user for server functions on this thread
///
/// Keep the returned owner alive for as long as the session should last.
pub fn sign_in(user_id: i32) -> Owner {
    let owner = Owner::new();
    owner.set();
    provide_context(SessionUser(user_id));
    owner
}

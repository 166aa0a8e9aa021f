// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Each function is a thin bridge: resolve the pool (and the signed-in
// user where needed), call into api::queries, convert the error.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use sqlx::PgPool;
    use leptos_actix::extract;
    use crate::web_app::api::db;

    // First try to get from context (for testing or if manually set)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    tracing::error!("Database pool could not be resolved from any source");
    Err(crate::web_app::api::StoreError::PoolUnavailable.log().into())
}

/// All product categories, for the navigation bar
#[server(ListCategories, "/api")]
pub async fn list_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::web_app::api::{queries, StoreError};

    let pool = pool().await?;
    Ok(queries::list_categories(&pool).await.map_err(StoreError::log)?)
}

/// Catalog listing, optionally restricted to one category slug
#[server(ListProducts, "/api")]
pub async fn list_products(category: Option<String>) -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::{db, queries, StoreError};

    tracing::info!("List products: category={:?}", category);

    let pool = pool().await?;
    let products = queries::list_products(&pool, category.as_deref(), db::media_base())
        .await
        .map_err(StoreError::log)?;

    tracing::info!("Found {} products", products.len());
    Ok(products)
}

/// A single product with images and reviews
#[server(GetProduct, "/api")]
pub async fn get_product(id: i32) -> Result<Product, ServerFnError> {
    use crate::web_app::api::{db, queries, StoreError};

    let pool = pool().await?;
    Ok(queries::get_product(&pool, id, db::media_base()).await.map_err(StoreError::log)?)
}

/// The signed-in user's wishlist
#[server(ListWishlist, "/api")]
pub async fn list_wishlist() -> Result<Vec<WishlistItem>, ServerFnError> {
    use crate::web_app::api::{db, queries, session, StoreError};

    let pool = pool().await?;
    let user = session::require_user(&pool).await.map_err(StoreError::log)?;
    Ok(queries::list_wishlist(&pool, user.0, db::media_base()).await.map_err(StoreError::log)?)
}

/// Save a product to the signed-in user's wishlist
#[server(AddToWishlist, "/api")]
pub async fn add_to_wishlist(product_id: i32) -> Result<WishlistItem, ServerFnError> {
    use crate::web_app::api::{db, queries, session, StoreError};

    let pool = pool().await?;
    let user = session::require_user(&pool).await.map_err(StoreError::log)?;
    tracing::info!("User {} saves product {}", user.0, product_id);
    Ok(queries::add_to_wishlist(&pool, user.0, product_id, db::media_base()).await.map_err(StoreError::log)?)
}

/// Drop a product from the signed-in user's wishlist
#[server(RemoveFromWishlist, "/api")]
pub async fn remove_from_wishlist(product_id: i32) -> Result<bool, ServerFnError> {
    use crate::web_app::api::{queries, session, StoreError};

    let pool = pool().await?;
    let user = session::require_user(&pool).await.map_err(StoreError::log)?;
    tracing::info!("User {} removes product {}", user.0, product_id);
    Ok(queries::remove_from_wishlist(&pool, user.0, product_id).await.map_err(StoreError::log)?)
}

/// The signed-in user's orders, newest first
#[server(ListOrders, "/api")]
pub async fn list_orders() -> Result<Vec<Order>, ServerFnError> {
    use crate::web_app::api::{queries, session, StoreError};

    let pool = pool().await?;
    let user = session::require_user(&pool).await.map_err(StoreError::log)?;
    Ok(queries::list_orders(&pool, user.0).await.map_err(StoreError::log)?)
}

/// The signed-in user's profile
#[server(GetProfile, "/api")]
pub async fn get_profile() -> Result<UserProfile, ServerFnError> {
    use crate::web_app::api::{db, queries, session, StoreError};

    let pool = pool().await?;
    let user = session::require_user(&pool).await.map_err(StoreError::log)?;
    Ok(queries::get_profile(&pool, user.0, db::media_base()).await.map_err(StoreError::log)?)
}

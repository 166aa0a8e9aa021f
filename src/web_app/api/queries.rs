// web_app/api/queries.rs - Database query implementations
//
// Plain async functions taking a pool and parameters and returning
// typed results. Products are loaded in two steps: one query for the
// product rows, then one batch query each for tags, images and reviews.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::error::StoreError;
use crate::web_app::media;
use crate::web_app::model::*;

const PRODUCT_SELECT: &str = r#"
    SELECT
        p.id, u.username AS seller, p.title, p.description,
        p.price, p.stock, c.slug AS category, b.slug AS brand,
        p.discount_percent, p.featured, p.created_at
    FROM store.products p
    JOIN store.users u ON u.id = p.seller_id
    LEFT JOIN store.categories c ON c.id = p.category_id
    LEFT JOIN store.brands b ON b.id = p.brand_id
"#;

const PRODUCT_ORDER: &str = "ORDER BY p.created_at DESC, p.id DESC";

/// Product columns before tags, images and reviews are attached
#[derive(Clone, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    seller: String,
    title: String,
    description: String,
    price: Decimal,
    stock: i32,
    category: Option<String>,
    brand: Option<String>,
    discount_percent: i32,
    featured: bool,
    created_at: chrono::NaiveDateTime,
}

#[derive(sqlx::FromRow)]
struct TagRow {
    product_id: i32,
    slug: String,
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    id: i32,
    product_id: i32,
    image: Option<String>,
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i32,
    product_id: i32,
    rating: i32,
    comment: String,
    created_at: chrono::NaiveDateTime,
    user_id: i32,
    username: String,
    avatar: Option<String>,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    status: String,
    created_at: chrono::NaiveDateTime,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    order_id: i32,
    product_id: i32,
    title: String,
    quantity: i32,
    unit_price: Decimal,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i32,
    username: String,
    email: String,
    date_joined: chrono::NaiveDateTime,
    avatar: Option<String>,
}

impl ProductRow {
    fn into_product(
        self,
        tags: Vec<String>,
        images: Vec<ProductImage>,
        reviews: Vec<Review>,
    ) -> Product {
        Product {
            final_price: final_price(self.price, self.discount_percent),
            id: self.id,
            seller: self.seller,
            title: self.title,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            brand: self.brand,
            discount_percent: self.discount_percent,
            featured: self.featured,
            created_at: self.created_at,
            tags,
            images,
            reviews,
        }
    }
}

/// All categories, alphabetically
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, StoreError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, slug FROM store.categories ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

/// Products, newest first
///
/// `None` lists the whole catalog. `Some(slug)` keeps only products of
/// that category; an unknown slug yields an empty list.
pub async fn list_products(
    pool: &PgPool,
    category: Option<&str>,
    media_base: Option<&str>,
) -> Result<Vec<Product>, StoreError> {
    let sql = format!(
        "{} WHERE ($1::text IS NULL OR c.slug = $1) {}",
        PRODUCT_SELECT, PRODUCT_ORDER
    );

    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(category)
        .fetch_all(pool)
        .await?;

    attach_details(pool, rows, media_base).await
}

pub async fn get_product(pool: &PgPool, id: i32, media_base: Option<&str>) -> Result<Product, StoreError> {
    let mut products = products_by_ids(pool, &[id], media_base).await?;
    products
        .pop()
        .ok_or(StoreError::NotFound { what: "product", id })
}

/// Products with the given ids, newest first; unknown ids are skipped
pub async fn products_by_ids(
    pool: &PgPool,
    ids: &[i32],
    media_base: Option<&str>,
) -> Result<Vec<Product>, StoreError> {
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let sql = format!("{} WHERE p.id = ANY($1) {}", PRODUCT_SELECT, PRODUCT_ORDER);
    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(ids)
        .fetch_all(pool)
        .await?;

    attach_details(pool, rows, media_base).await
}

async fn attach_details(
    pool: &PgPool,
    rows: Vec<ProductRow>,
    media_base: Option<&str>,
) -> Result<Vec<Product>, StoreError> {
    if rows.is_empty() {
        return Ok(vec![]);
    }
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

    let tag_rows = sqlx::query_as::<_, TagRow>(
        r#"
        SELECT pt.product_id, t.slug
        FROM store.product_tags pt
        JOIN store.tags t ON t.id = pt.tag_id
        WHERE pt.product_id = ANY($1)
        ORDER BY t.slug
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let image_rows = sqlx::query_as::<_, ImageRow>(
        r#"
        SELECT id, product_id, image
        FROM store.product_images
        WHERE product_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let review_rows = sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT
            r.id, r.product_id, r.rating, r.comment, r.created_at,
            u.id AS user_id, u.username, pr.avatar
        FROM store.reviews r
        JOIN store.users u ON u.id = r.user_id
        LEFT JOIN store.profiles pr ON pr.user_id = u.id
        WHERE r.product_id = ANY($1)
        ORDER BY r.created_at, r.id
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
    for row in tag_rows {
        tags.entry(row.product_id).or_default().push(row.slug);
    }

    let mut images: HashMap<i32, Vec<ProductImage>> = HashMap::new();
    for row in image_rows {
        images.entry(row.product_id).or_default().push(ProductImage {
            id: row.id,
            image: media::resolve(row.image.as_deref(), media_base),
        });
    }

    let mut reviews: HashMap<i32, Vec<Review>> = HashMap::new();
    for row in review_rows {
        reviews.entry(row.product_id).or_default().push(Review {
            id: row.id,
            user: UserSummary {
                id: row.user_id,
                username: row.username,
                avatar: media::resolve(row.avatar.as_deref(), media_base),
            },
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
        });
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let id = row.id;
            row.into_product(
                tags.remove(&id).unwrap_or_default(),
                images.remove(&id).unwrap_or_default(),
                reviews.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}

/// The user's wishlist, most recently added first
pub async fn list_wishlist(
    pool: &PgPool,
    user_id: i32,
    media_base: Option<&str>,
) -> Result<Vec<WishlistItem>, StoreError> {
    let entries: Vec<(i32, i32, chrono::NaiveDateTime)> = sqlx::query_as(
        r#"
        SELECT id, product_id, created_at
        FROM store.wishlist
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i32> = entries.iter().map(|(_, product_id, _)| *product_id).collect();
    let mut products: HashMap<i32, Product> = products_by_ids(pool, &ids, media_base)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(entries
        .into_iter()
        .filter_map(|(id, product_id, created_at)| {
            products.remove(&product_id).map(|product| WishlistItem {
                id,
                product,
                created_at,
            })
        })
        .collect())
}

/// Save a product to the wishlist; saving it twice keeps the first entry
pub async fn add_to_wishlist(
    pool: &PgPool,
    user_id: i32,
    product_id: i32,
    media_base: Option<&str>,
) -> Result<WishlistItem, StoreError> {
    let product = get_product(pool, product_id, media_base).await?;

    let (id, created_at): (i32, chrono::NaiveDateTime) = sqlx::query_as(
        r#"
        INSERT INTO store.wishlist (user_id, product_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, product_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING id, created_at
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(pool)
    .await?;

    Ok(WishlistItem {
        id,
        product,
        created_at,
    })
}

/// Remove a product from the wishlist; false when it was not saved
pub async fn remove_from_wishlist(pool: &PgPool, user_id: i32, product_id: i32) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM store.wishlist WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// The user's orders with their items, newest first
pub async fn list_orders(pool: &PgPool, user_id: i32) -> Result<Vec<Order>, StoreError> {
    let order_rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, status, created_at
        FROM store.orders
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    if order_rows.is_empty() {
        return Ok(vec![]);
    }
    let ids: Vec<i32> = order_rows.iter().map(|o| o.id).collect();

    let item_rows = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT order_id, product_id, title, quantity, unit_price
        FROM store.order_items
        WHERE order_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut items: HashMap<i32, Vec<OrderItem>> = HashMap::new();
    for row in item_rows {
        items.entry(row.order_id).or_default().push(OrderItem {
            product_id: row.product_id,
            title: row.title,
            quantity: row.quantity,
            unit_price: row.unit_price,
        });
    }

    Ok(order_rows
        .into_iter()
        .map(|row| {
            let status = row.status.parse().unwrap_or_else(|e| {
                tracing::warn!("Order {}: {}", row.id, e);
                OrderStatus::default()
            });
            Order {
                id: row.id,
                status,
                created_at: row.created_at,
                items: items.remove(&row.id).unwrap_or_default(),
            }
        })
        .collect())
}

pub async fn get_profile(pool: &PgPool, user_id: i32, media_base: Option<&str>) -> Result<UserProfile, StoreError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT u.id, u.username, u.email, u.date_joined, pr.avatar
        FROM store.users u
        LEFT JOIN store.profiles pr ON pr.user_id = u.id
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound { what: "user", id: user_id })?;

    Ok(UserProfile {
        id: row.id,
        username: row.username,
        email: row.email,
        avatar: media::resolve(row.avatar.as_deref(), media_base),
        date_joined: row.date_joined,
    })
}

/// Look up a user id by username
pub async fn find_user_id(pool: &PgPool, username: &str) -> Result<Option<i32>, StoreError> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM store.users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(id,)| id))
}

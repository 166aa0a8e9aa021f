// web_app/api/seed.rs - Load a catalog document into empty tables

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::web_app::model::{slugify, CatalogImport};

/// Number of products currently in the catalog
pub async fn product_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM store.products")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert every user, category, brand and product of `catalog`
///
/// Runs in one transaction. Names are upserted by slug, so categories or
/// brands that already exist are reused. Returns the number of products
/// inserted; products whose seller is unknown or whose price is not a
/// valid amount are skipped.
pub async fn seed_catalog(pool: &PgPool, catalog: &CatalogImport) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let mut users: HashMap<String, i32> = HashMap::new();
    for user in &catalog.users {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO store.users (username, email) VALUES ($1, $2)
            ON CONFLICT (username) DO UPDATE SET email = EXCLUDED.email
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO store.profiles (user_id, avatar) VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET avatar = EXCLUDED.avatar
            "#,
        )
        .bind(id)
        .bind(&user.avatar)
        .execute(&mut *tx)
        .await?;

        users.insert(user.username.clone(), id);
    }

    let mut categories: HashMap<String, i32> = HashMap::new();
    let mut brands: HashMap<String, i32> = HashMap::new();
    let mut tags: HashMap<String, i32> = HashMap::new();

    let category_names = catalog
        .categories
        .iter()
        .chain(catalog.products.iter().filter_map(|p| p.category.as_ref()));
    for name in category_names {
        if !categories.contains_key(name) {
            let id = upsert_named(&mut tx, "categories", name).await?;
            categories.insert(name.clone(), id);
        }
    }

    let brand_names = catalog
        .brands
        .iter()
        .chain(catalog.products.iter().filter_map(|p| p.brand.as_ref()));
    for name in brand_names {
        if !brands.contains_key(name) {
            let id = upsert_named(&mut tx, "brands", name).await?;
            brands.insert(name.clone(), id);
        }
    }

    let mut inserted = 0;
    for product in &catalog.products {
        let Some(&seller_id) = users.get(&product.seller) else {
            tracing::warn!("Skipping '{}': unknown seller '{}'", product.title, product.seller);
            continue;
        };

        let Some(price) = import_price(product.price) else {
            tracing::warn!("Skipping '{}': invalid price {}", product.title, product.price);
            continue;
        };

        let (product_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO store.products (
                seller_id, title, description, price, stock,
                category_id, brand_id, discount_percent, featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(seller_id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(price)
        .bind(product.stock.unwrap_or(0))
        .bind(product.category.as_ref().and_then(|c| categories.get(c)).copied())
        .bind(product.brand.as_ref().and_then(|b| brands.get(b)).copied())
        .bind(product.discount_percent.unwrap_or(0).clamp(0, 100))
        .bind(product.featured.unwrap_or(false))
        .fetch_one(&mut *tx)
        .await?;

        for tag in product.tags.iter().flatten() {
            let tag_id = match tags.get(tag) {
                Some(id) => *id,
                None => {
                    let id = upsert_named(&mut tx, "tags", tag).await?;
                    tags.insert(tag.clone(), id);
                    id
                }
            };
            sqlx::query("INSERT INTO store.product_tags (product_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(product_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        for image in product.images.iter().flatten() {
            sqlx::query("INSERT INTO store.product_images (product_id, image) VALUES ($1, $2)")
                .bind(product_id)
                .bind(image)
                .execute(&mut *tx)
                .await?;
        }

        inserted += 1;
    }

    tx.commit().await?;
    tracing::info!("Seeded {} products", inserted);
    Ok(inserted)
}

/// Price in cents precision; None for NaN, infinite or negative values
fn import_price(raw: f64) -> Option<Decimal> {
    let price = Decimal::try_from(raw).ok()?.round_dp(2);
    (price >= Decimal::ZERO).then_some(price)
}

/// Insert-or-get a row of a `{ id, name, slug }` table
async fn upsert_named(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    table: &'static str,
    name: &str,
) -> Result<i32, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO store.{} (name, slug) VALUES ($1, $2)
        ON CONFLICT (slug) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
        table
    );
    let (id,): (i32,) = sqlx::query_as(&sql)
        .bind(name)
        .bind(slugify(name))
        .fetch_one(&mut **tx)
        .await?;
    Ok(id)
}

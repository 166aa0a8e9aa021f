// tests/catalog_queries_tests.rs
// Catalog reads and seeding against a real PostgreSQL database

mod common;

use common::{create_test_pool, teardown_store, with_store};
use rust_decimal::Decimal;
use storefront::fixtures::tables::catalog::*;
use storefront::web_app::api::{db, queries, seed, StoreError};
use storefront::web_app::model::{CatalogImport, ProductImport, UserImport};

const MEDIA: Option<&str> = Some("https://shop.example.com/media");

fn ids(products: &[storefront::web_app::model::Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_categories_sorted_by_name() -> anyhow::Result<()> {
    with_store(|pool| async move {
        let categories = queries::list_categories(&pool).await?;
        let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["books", "electronics", "home-kitchen"]);
        assert_eq!(categories[2].name, "Home & Kitchen");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_list_all_products_newest_first() -> anyhow::Result<()> {
    with_store(|pool| async move {
        let products = queries::list_products(&pool, None, MEDIA).await?;
        assert_eq!(ids(&products), [CABLE_ID, KNIFE_ID, BOOK_ID, HEADPHONES_ID]);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_list_products_by_category() -> anyhow::Result<()> {
    with_store(|pool| async move {
        let electronics = queries::list_products(&pool, Some("electronics"), MEDIA).await?;
        assert_eq!(ids(&electronics), [CABLE_ID, HEADPHONES_ID]);
        assert!(electronics.iter().all(|p| p.category.as_deref() == Some("electronics")));

        let unknown = queries::list_products(&pool, Some("garden"), MEDIA).await?;
        assert!(unknown.is_empty());

        // An empty slug is a real filter value at this layer
        let empty = queries::list_products(&pool, Some(""), MEDIA).await?;
        assert!(empty.is_empty());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_product_details() -> anyhow::Result<()> {
    with_store(|pool| async move {
        let headphones = queries::get_product(&pool, HEADPHONES_ID, MEDIA).await?;

        assert_eq!(headphones.seller, "alice");
        assert_eq!(headphones.brand.as_deref(), Some("acme"));
        assert_eq!(headphones.tags, ["audio", "wireless"]);
        assert!(headphones.featured);

        assert_eq!(headphones.price, Decimal::new(10000, 2));
        assert_eq!(headphones.final_price, Decimal::new(8500, 2));
        assert!(headphones.is_discounted());

        let images: Vec<Option<&str>> = headphones.images.iter().map(|i| i.image.as_deref()).collect();
        assert_eq!(
            images,
            [
                Some("https://shop.example.com/media/products/headphones.jpg"),
                Some("https://cdn.example.com/headphones-side.jpg"),
            ]
        );

        assert_eq!(headphones.reviews.len(), 2);
        assert_eq!(headphones.reviews[0].user.username, "bob");
        assert_eq!(headphones.reviews[0].user.avatar, None);
        assert_eq!(
            headphones.reviews[1].user.avatar.as_deref(),
            Some("https://shop.example.com/media/avatars/alice.png")
        );
        assert_eq!(headphones.average_rating(), Some(4.5));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_product_edge_cases() -> anyhow::Result<()> {
    with_store(|pool| async move {
        let book = queries::get_product(&pool, BOOK_ID, None).await?;
        assert!(!book.in_stock());
        assert_eq!(book.brand, None);
        assert_eq!(book.final_price, book.price);
        assert_eq!(book.images.len(), 1);
        assert_eq!(book.primary_image(), None);
        assert_eq!(book.average_rating(), None);

        let knife = queries::get_product(&pool, KNIFE_ID, None).await?;
        assert_eq!(knife.final_price, Decimal::new(4095, 2));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_missing_product() -> anyhow::Result<()> {
    with_store(|pool| async move {
        let err = queries::get_product(&pool, 999, None).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { what: "product", id: 999 }));

        let found = queries::products_by_ids(&pool, &[KNIFE_ID, 999, BOOK_ID], None).await?;
        assert_eq!(ids(&found), [KNIFE_ID, BOOK_ID]);
        assert!(queries::products_by_ids(&pool, &[], None).await?.is_empty());
        Ok(())
    })
    .await
}

fn sample_catalog() -> CatalogImport {
    CatalogImport {
        users: vec![UserImport {
            username: "carol".to_string(),
            email: "carol@example.com".to_string(),
            avatar: None,
        }],
        categories: vec!["Garden".to_string()],
        brands: vec![],
        products: vec![
            ProductImport {
                seller: "carol".to_string(),
                title: "Watering Can".to_string(),
                description: "Five litres".to_string(),
                price: 18.5,
                stock: Some(4),
                category: Some("Garden".to_string()),
                brand: Some("Green Thumb".to_string()),
                tags: Some(vec!["Outdoor".to_string()]),
                discount_percent: Some(20),
                featured: None,
                images: Some(vec!["products/can.jpg".to_string()]),
            },
            ProductImport {
                seller: "carol".to_string(),
                title: "Refund Voucher".to_string(),
                description: String::new(),
                price: -5.0,
                stock: None,
                category: Some("Garden".to_string()),
                brand: None,
                tags: None,
                discount_percent: None,
                featured: None,
                images: None,
            },
            ProductImport {
                seller: "nobody".to_string(),
                title: "Orphan".to_string(),
                description: String::new(),
                price: 1.0,
                stock: None,
                category: None,
                brand: None,
                tags: None,
                discount_percent: None,
                featured: None,
                images: None,
            },
        ],
    }
}

#[tokio::test]
async fn test_seed_catalog_into_empty_schema() -> anyhow::Result<()> {
    let _guard = common::lock().await;
    let pool = create_test_pool().await?;
    teardown_store(&pool).await?;
    db::apply_schema(&pool).await?;
    // Applying twice is harmless
    db::apply_schema(&pool).await?;

    assert_eq!(seed::product_count(&pool).await?, 0);

    // Unknown seller and negative price are both skipped
    let inserted = seed::seed_catalog(&pool, &sample_catalog()).await?;
    assert_eq!(inserted, 1);
    assert_eq!(seed::product_count(&pool).await?, 1);

    let products = queries::list_products(&pool, Some("garden"), None).await?;
    assert_eq!(products.len(), 1);
    let can = &products[0];
    assert_eq!(can.seller, "carol");
    assert_eq!(can.brand.as_deref(), Some("green-thumb"));
    assert_eq!(can.tags, ["outdoor"]);
    assert_eq!(can.stock, 4);
    assert!(!can.featured);
    assert_eq!(can.final_price, Decimal::new(1480, 2));
    assert_eq!(can.primary_image(), Some("products/can.jpg"));

    // Seeding again reuses users and categories by name
    seed::seed_catalog(&pool, &sample_catalog()).await?;
    assert_eq!(queries::list_categories(&pool).await?.len(), 1);
    assert_eq!(seed::product_count(&pool).await?, 2);

    teardown_store(&pool).await?;
    Ok(())
}

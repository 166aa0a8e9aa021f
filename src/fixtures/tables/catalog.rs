// fixtures/tables/catalog.rs
//
// The storefront schema plus a small, fully known catalog.
//
// Applied to a freshly dropped `store` schema, so SERIAL ids start at 1
// and the constants below hold.
//
// Users:      1 alice (seller, has avatar), 2 bob (no avatar)
// Categories: 1 electronics, 2 books, 3 home-kitchen
// Products:   1 Wireless Headphones (electronics, 15% off, 2 reviews)
//             2 Rust Programming Book (books, out of stock)
//             3 Chef Knife (home-kitchen, 10% off)
//             4 USB-C Cable (electronics)
//             created_at increases with the id, so newest first is 4, 3, 2, 1
// Wishlist:   bob has product 2
// Orders:     bob has 1 (delivered) and 2 (pending); alice has 3 with
//             a status the store does not know

use crate::fixtures::TestTable;

pub const ALICE_ID: i32 = 1;
pub const BOB_ID: i32 = 2;

/// Live session belonging to bob
pub const BOB_SESSION_TOKEN: &str = "5f0c6a1e-8d4b-4c2a-9e71-3b2d9f6a8c10";
/// Session belonging to alice that expired long ago
pub const EXPIRED_SESSION_TOKEN: &str = "0b7e9d2c-4a61-4f3e-8c15-7d9a2e4b6f08";

pub const HEADPHONES_ID: i32 = 1;
pub const BOOK_ID: i32 = 2;
pub const KNIFE_ID: i32 = 3;
pub const CABLE_ID: i32 = 4;

pub struct CatalogTables;

impl TestTable for CatalogTables {
    fn setup_sql() -> &'static [&'static str] {
        &[
            // 1. Schema
            include_str!("../../../sql/schema.sql"),
            // 2. Accounts
            r#"
            INSERT INTO store.users (username, email, date_joined) VALUES
                ('alice', 'alice@example.com', '2023-05-14 09:30:00'),
                ('bob', 'bob@example.com', '2023-11-02 18:05:00');

            INSERT INTO store.profiles (user_id, avatar) VALUES
                (1, 'avatars/alice.png'),
                (2, NULL);

            INSERT INTO store.sessions (token, user_id, expires_at) VALUES
                ('5f0c6a1e-8d4b-4c2a-9e71-3b2d9f6a8c10', 2, '2099-01-01 00:00:00'),
                ('0b7e9d2c-4a61-4f3e-8c15-7d9a2e4b6f08', 1, '2000-01-01 00:00:00');
            "#,
            // 3. Catalog
            r#"
            INSERT INTO store.categories (name, slug) VALUES
                ('Electronics', 'electronics'),
                ('Books', 'books'),
                ('Home & Kitchen', 'home-kitchen');

            INSERT INTO store.brands (name, slug) VALUES
                ('Acme', 'acme');

            INSERT INTO store.tags (name, slug) VALUES
                ('Wireless', 'wireless'),
                ('Audio', 'audio'),
                ('Bestseller', 'bestseller');

            INSERT INTO store.products (
                seller_id, title, description, price, stock,
                category_id, brand_id, discount_percent, featured, created_at
            ) VALUES
                (1, 'Wireless Headphones', 'Over-ear headphones with noise cancellation and 30-hour battery life',
                 100.00, 10, 1, 1, 15, true, '2024-01-01 10:00:00'),
                (1, 'Rust Programming Book', 'A practical guide to systems programming in Rust',
                 39.99, 0, 2, NULL, 0, false, '2024-01-02 10:00:00'),
                (1, 'Chef Knife', 'Eight-inch stainless steel chef knife',
                 45.50, 5, 3, NULL, 10, false, '2024-01-03 10:00:00'),
                (1, 'USB-C Cable', 'Braided fast-charging cable, two metres',
                 12.99, 100, 1, 1, 0, false, '2024-01-04 10:00:00');

            INSERT INTO store.product_tags (product_id, tag_id) VALUES
                (1, 1), (1, 2), (2, 3);

            INSERT INTO store.product_images (product_id, image) VALUES
                (1, 'products/headphones.jpg'),
                (1, 'https://cdn.example.com/headphones-side.jpg'),
                (2, NULL);

            INSERT INTO store.reviews (product_id, user_id, rating, comment, created_at) VALUES
                (1, 2, 5, 'Great sound', '2024-02-10 12:00:00'),
                (1, 1, 4, 'Solid build', '2024-02-11 12:00:00');
            "#,
            // 4. Wishlist and orders
            r#"
            INSERT INTO store.wishlist (user_id, product_id, created_at) VALUES
                (2, 2, '2024-02-20 08:00:00');

            INSERT INTO store.orders (user_id, status, created_at) VALUES
                (2, 'delivered', '2024-02-01 15:00:00'),
                (2, 'pending', '2024-03-01 15:00:00'),
                (1, 'refunded', '2024-03-05 15:00:00');

            INSERT INTO store.order_items (order_id, product_id, title, quantity, unit_price) VALUES
                (1, 1, 'Wireless Headphones', 1, 85.00),
                (1, 4, 'USB-C Cable', 2, 12.99),
                (2, 3, 'Chef Knife', 1, 40.95),
                (3, 2, 'Rust Programming Book', 1, 39.99);
            "#,
        ]
    }
}

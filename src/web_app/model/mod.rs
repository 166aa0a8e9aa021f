// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the server functions and the
// components, so they must compile for both SSR and WASM.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use sqlx::FromRow;

mod import;

pub use import::{slugify, CatalogImport, ProductImport, UserImport};

/// Message carried by server errors when no user is signed in
pub const NOT_AUTHENTICATED: &str = "not authenticated";

/// Product category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(FromRow))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Product image; `image` is already an absolute URL when present
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i32,
    pub image: Option<String>,
}

/// Public view of a user, as shown next to a review
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub user: UserSummary,
    pub rating: i32,
    pub comment: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Catalog product with its images, reviews and computed final price
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    /// Seller username
    pub seller: String,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    /// Category slug
    pub category: Option<String>,
    /// Brand slug
    pub brand: Option<String>,
    pub discount_percent: i32,
    pub featured: bool,
    pub created_at: chrono::NaiveDateTime,
    /// Tag slugs
    pub tags: Vec<String>,
    pub images: Vec<ProductImage>,
    pub reviews: Vec<Review>,
    pub final_price: Decimal,
}

impl Product {
    pub fn is_discounted(&self) -> bool {
        self.discount_percent != 0
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Mean review rating, None when nobody reviewed the product
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: i32 = self.reviews.iter().map(|r| r.rating).sum();
        Some(f64::from(sum) / self.reviews.len() as f64)
    }

    /// First image that actually has a URL
    pub fn primary_image(&self) -> Option<&str> {
        self.images.iter().find_map(|i| i.image.as_deref())
    }
}

/// Price after applying a percentage discount, rounded to cents
///
/// Rounding is half-to-even. A zero discount leaves the price untouched.
pub fn final_price(price: Decimal, discount_percent: i32) -> Decimal {
    if discount_percent == 0 {
        return price;
    }
    (price * Decimal::from(100 - discount_percent) / Decimal::from(100)).round_dp(2)
}

/// A product saved to the signed-in user's wishlist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: i32,
    pub product: Product,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i32,
    pub title: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub status: OrderStatus,
    pub created_at: chrono::NaiveDateTime,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// The signed-in user's own profile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub date_joined: chrono::NaiveDateTime,
}

impl UserProfile {
    /// Uppercase first letter of the username, shown when there is no avatar
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Whether a server function failed because nobody is signed in
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub fn is_not_authenticated(err: &leptos::prelude::ServerFnError) -> bool {
    matches!(err, leptos::prelude::ServerFnError::ServerError(msg) if msg == NOT_AUTHENTICATED)
}

// web_app/model/import.rs - Catalog seed document
//
// Shape of data/catalog.json. Optional fields fall back to the column
// defaults when imported.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogImport {
    #[serde(default)]
    pub users: Vec<UserImport>,
    /// Category names; slugs are derived
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub products: Vec<ProductImport>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserImport {
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductImport {
    /// Username of the seller, must appear in `users`
    pub seller: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: Option<i32>,
    /// Category name
    pub category: Option<String>,
    /// Brand name
    pub brand: Option<String>,
    pub tags: Option<Vec<String>>,
    pub discount_percent: Option<i32>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
}

/// URL-safe slug: lowercase alphanumerics separated by single dashes
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, Badge, PriceDisplay, etc.)
// - navbar.rs: Navbar and Footer
// - landing.rs: HeroSection and AboutUs
// - product.rs: Products listing and ProductCard
// - orders.rs: Orders history
// - wishlist.rs: Wishlist
// - profile.rs: ProfileWrapper and ProfileDetails

pub mod common;
pub mod landing;
pub mod navbar;
pub mod orders;
pub mod product;
pub mod profile;
pub mod wishlist;

// Re-export commonly used components for convenience
pub use common::*;
pub use landing::*;
pub use navbar::*;
pub use orders::*;
pub use product::*;
pub use profile::*;
pub use wishlist::*;

// web_app/pages/mod.rs - Page components module
//
// One component per route. A page owns no state: it hands its section
// list (see web_app::layout) to PageLayout, which renders each section's
// component in order.

pub mod home;
pub mod orders;
pub mod products;
pub mod profile;
pub mod shell;
pub mod wishlist;

// Re-export page components
pub use home::Home;
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use profile::Profile;
pub use shell::{render_section, PageLayout};
pub use wishlist::WishlistPage;

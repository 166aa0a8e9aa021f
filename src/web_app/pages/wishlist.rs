// web_app/pages/wishlist.rs - Saved products page

use leptos::prelude::*;

use super::PageLayout;
use crate::web_app::layout::Page;

#[component]
pub fn WishlistPage() -> impl IntoView {
    view! { <PageLayout page=Page::Wishlist /> }
}

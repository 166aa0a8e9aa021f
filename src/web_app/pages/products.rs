// web_app/pages/products.rs - Catalog page

use leptos::prelude::*;

use super::PageLayout;
use crate::web_app::layout::Page;

/// Product listing inside the `products-page` container
///
/// `selected_category` reaches the listing exactly as given; leaving it
/// out lists every product.
#[component]
pub fn ProductsPage(
    /// Category slug to show
    #[prop(default = None)]
    selected_category: Option<String>,
) -> impl IntoView {
    view! { <PageLayout page=Page::products(selected_category) /> }
}

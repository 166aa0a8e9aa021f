// web_app/pages/orders.rs - Order history page

use leptos::prelude::*;

use super::PageLayout;
use crate::web_app::layout::Page;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! { <PageLayout page=Page::Orders /> }
}

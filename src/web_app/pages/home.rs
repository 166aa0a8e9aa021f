// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

use super::PageLayout;
use crate::web_app::layout::Page;

/// Navbar, hero banner, full product listing, about section, footer
#[component]
pub fn Home() -> impl IntoView {
    view! { <PageLayout page=Page::Home /> }
}

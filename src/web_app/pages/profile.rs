// web_app/pages/profile.rs - Account page

use leptos::prelude::*;

use super::PageLayout;
use crate::web_app::layout::Page;

#[component]
pub fn Profile() -> impl IntoView {
    view! { <PageLayout page=Page::Profile /> }
}

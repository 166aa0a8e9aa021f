// web_app/pages/shell.rs - Renders a page's section list

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::*;
use crate::web_app::layout::{Page, Section};

/// Render one section and, for containers, everything nested in it
pub fn render_section(section: Section) -> AnyView {
    match section {
        Section::Navbar => view! { <Navbar /> }.into_any(),
        Section::HeroSection => view! { <HeroSection /> }.into_any(),
        Section::Products { selected_category } => {
            view! { <Products selected_category=selected_category /> }.into_any()
        }
        Section::AboutUs => view! { <AboutUs /> }.into_any(),
        Section::Orders => view! { <Orders /> }.into_any(),
        Section::Wishlist => view! { <Wishlist /> }.into_any(),
        Section::ProfileWrapper => view! { <ProfileWrapper /> }.into_any(),
        Section::Footer => view! { <Footer /> }.into_any(),
        Section::Container { class, children } => view! {
            <div class=class>
                {children.into_iter().map(render_section).collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Sets the document title and renders the page's sections in order
#[component]
pub fn PageLayout(page: Page) -> impl IntoView {
    let title = page.title();

    view! {
        <Title text=title />
        {page.sections().into_iter().map(render_section).collect_view()}
    }
}

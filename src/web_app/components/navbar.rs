// web_app/components/navbar.rs - Site chrome: navigation bar and footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::layout::Page;
use crate::web_app::server_fns::list_categories;

/// Link target for a category on the products page
pub fn category_href(slug: &str) -> String {
    format!("{}?category={}", Page::products(None).path(), slug)
}

/// Top navigation bar
///
/// Page links plus one link per catalog category. Categories load
/// in the background; the bar renders without them until they arrive.
#[component]
pub fn Navbar() -> impl IntoView {
    let categories = Resource::new(|| (), |_| list_categories());

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-2">
                    <span class="text-2xl">"🛍"</span>
                    <span class="text-xl font-bold text-indigo-600">"Storefront"</span>
                </A>

                <div class="flex items-center gap-6 text-sm font-medium text-gray-700">
                    <A href="/products" attr:class="hover:text-indigo-600">"Products"</A>
                    <A href="/wishlist" attr:class="hover:text-indigo-600">"Wishlist"</A>
                    <A href="/orders" attr:class="hover:text-indigo-600">"Orders"</A>
                    <A href="/profile" attr:class="hover:text-indigo-600">"Profile"</A>
                </div>
            </nav>

            <Suspense fallback=|| ()>
                {move || {
                    categories.get().and_then(Result::ok).map(|categories| view! {
                        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-3 flex flex-wrap gap-4 text-sm text-gray-500">
                            {categories.into_iter().map(|category| view! {
                                <a href=category_href(&category.slug) class="hover:text-indigo-600">
                                    {category.name}
                                </a>
                            }).collect_view()}
                        </div>
                    })
                }}
            </Suspense>
        </header>
    }
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 mt-12 py-8">
            <div class="max-w-7xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-gray-500">
                <p>"© 2025 Storefront. Built with Leptos, Actix, and PostgreSQL."</p>
                <div class="flex gap-4">
                    <a href="/products" class="hover:text-gray-700">"Shop"</a>
                    <a href="/#about" class="hover:text-gray-700">"About us"</a>
                    <a href="/profile" class="hover:text-gray-700">"Account"</a>
                </div>
            </div>
        </footer>
    }
}

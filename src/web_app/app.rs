// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and the router. Each route maps to
// one page component from web_app::pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_query_map;
use leptos_router::path;

use crate::web_app::pages::{Home, OrdersPage, ProductsPage, Profile, WishlistPage};

/// Query parameter carrying the category slug on /products
pub const CATEGORY_QUERY_PARAM: &str = "category";

/// Category requested through the URL; an empty value means no filter
pub fn category_from_query(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

/// HTML document wrapping the app for server-side rendering
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-gray-50 font-sans text-gray-900">
                <App/>
            </body>
        </html>
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="description" content="Shop products from independent sellers" />
        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <main class="min-h-screen flex flex-col">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/products") view=ProductsRoute />
                    <Route path=path!("/orders") view=OrdersPage />
                    <Route path=path!("/profile") view=Profile />
                    <Route path=path!("/wishlist") view=WishlistPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Feeds the `category` query parameter into ProductsPage
#[component]
fn ProductsRoute() -> impl IntoView {
    let query = use_query_map();

    move || {
        let selected_category = category_from_query(query.read().get(CATEGORY_QUERY_PARAM));
        view! { <ProductsPage selected_category=selected_category /> }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Back to the shop"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_query() {
        assert_eq!(category_from_query(None), None);
        assert_eq!(category_from_query(Some(String::new())), None);
        assert_eq!(category_from_query(Some("  ".to_string())), None);
        assert_eq!(
            category_from_query(Some("electronics".to_string())),
            Some("electronics".to_string())
        );
    }
}

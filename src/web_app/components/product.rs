// web_app/components/product.rs - Product listing components
//
// - Products: loads the catalog (optionally one category) and shows a grid
// - ProductCard: one product tile with price, rating and wishlist action

use leptos::prelude::*;

use crate::web_app::components::common::*;
use crate::web_app::model::Product;
use crate::web_app::server_fns::{list_products, AddToWishlist};

/// Heading above the grid
pub fn listing_heading(selected_category: Option<&str>) -> String {
    match selected_category {
        Some(slug) => format!("Category: {}", slug),
        None => "All products".to_string(),
    }
}

/// Shorten a description to `max` characters, appending an ellipsis
pub fn truncate_description(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Product listing
///
/// `selected_category` is passed to the server untouched: `None` lists
/// the whole catalog.
#[component]
pub fn Products(
    /// Category slug to filter by
    #[prop(default = None)]
    selected_category: Option<String>,
) -> impl IntoView {
    let heading = listing_heading(selected_category.as_deref());
    let products = Resource::new(move || selected_category.clone(), list_products);

    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{heading}</h2>

            <Suspense fallback=move || view! { <Loading message="Loading products..." /> }>
                {move || {
                    match products.get() {
                        None => view! { <Loading message="Loading products..." /> }.into_any(),
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(list)) if list.is_empty() => view! {
                            <EmptyState
                                icon="📦"
                                title="No products found"
                                message="There is nothing in this category yet. Check back soon."
                            />
                        }.into_any(),
                        Some(Ok(list)) => view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                {list.into_iter().map(|product| view! {
                                    <ProductCard product=product />
                                }).collect_view()}
                            </div>
                        }.into_any(),
                    }
                }}
            </Suspense>
        </section>
    }
}

/// One product tile
#[component]
pub fn ProductCard(
    product: Product,
    /// Extra controls rendered under the price (e.g. "Remove")
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let add = ServerAction::<AddToWishlist>::new();
    let product_id = product.id;

    let image = product.primary_image().map(str::to_string);
    let title = product.title.clone();
    let rating = product.average_rating();
    let review_count = product.reviews.len();
    let in_stock = product.in_stock();

    // Cards that bring their own controls (the wishlist) skip the save button
    let show_save = children.is_none();

    let wishlist_feedback = move || {
        add.value().get().map(|result| match result {
            Ok(_) => view! { <span class="text-xs text-green-600">"Saved to wishlist"</span> }.into_any(),
            Err(e) => view! {
                <span class="text-xs text-red-600">{action_error_message(&e, "save items")}</span>
            }.into_any(),
        })
    };

    view! {
        <article class="bg-white rounded-2xl shadow-sm border border-gray-100 overflow-hidden flex flex-col">
            <div class="aspect-square bg-gray-100 flex items-center justify-center">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=title.clone() class="w-full h-full object-cover" />
                    }.into_any(),
                    None => view! { <span class="text-5xl text-gray-300">"🖼"</span> }.into_any(),
                }}
            </div>

            <div class="p-4 flex flex-col gap-2 flex-1">
                <div class="flex flex-wrap gap-2">
                    {product.category.clone().map(|category| view! {
                        <Badge variant="blue">{category}</Badge>
                    })}
                    {product.featured.then(|| view! {
                        <Badge variant="yellow">"Featured"</Badge>
                    })}
                    {product.is_discounted().then(|| view! {
                        <Badge variant="red">{format!("-{}%", product.discount_percent)}</Badge>
                    })}
                </div>

                <h3 class="font-semibold text-gray-900">{title}</h3>
                {product.brand.clone().map(|brand| view! {
                    <span class="text-xs uppercase tracking-wide text-gray-400">{brand}</span>
                })}
                <p class="text-sm text-gray-500">{truncate_description(&product.description, 120)}</p>

                {match rating {
                    Some(rating) => view! { <StarRating rating=rating review_count=review_count /> }.into_any(),
                    None => view! { <span class="text-xs text-gray-400">"No reviews yet"</span> }.into_any(),
                }}

                <div class="flex items-baseline gap-2 mt-auto">
                    <PriceDisplay price=product.final_price highlight=true />
                    {product.is_discounted().then(|| view! {
                        <PriceDisplay price=product.price struck=true />
                    })}
                </div>

                {if in_stock {
                    view! { <span class="text-xs text-green-600">{format!("{} in stock", product.stock)}</span> }.into_any()
                } else {
                    view! { <span class="text-xs text-red-600">"Out of stock"</span> }.into_any()
                }}

                {show_save.then(|| view! {
                    <button
                        type="button"
                        class="mt-2 px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 \
                               transition-colors text-sm font-medium disabled:bg-gray-400"
                        disabled=move || add.pending().get()
                        on:click=move |_| {
                            add.dispatch(AddToWishlist { product_id });
                        }
                    >
                        "♡ Add to wishlist"
                    </button>
                    {wishlist_feedback}
                })}

                {children.map(|children| children())}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_heading() {
        assert_eq!(listing_heading(None), "All products");
        assert_eq!(listing_heading(Some("electronics")), "Category: electronics");
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("Short", 120), "Short");

        let exact = "a".repeat(120);
        assert_eq!(truncate_description(&exact, 120), exact);

        let long = "a".repeat(121);
        let truncated = truncate_description(&long, 120);
        assert_eq!(truncated.len(), 123);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_description_multibyte() {
        let text = "ééééé";
        assert_eq!(truncate_description(text, 3), "ééé...");
    }

    #[test]
    fn test_truncate_trims_trailing_space() {
        assert_eq!(truncate_description("ab cd", 3), "ab...");
    }
}

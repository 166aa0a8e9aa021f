// web_app/components/wishlist.rs - The signed-in user's saved products

use leptos::prelude::*;

use crate::web_app::components::common::*;
use crate::web_app::components::product::ProductCard;
use crate::web_app::model::is_not_authenticated;
use crate::web_app::server_fns::{list_wishlist, RemoveFromWishlist};

/// Wishlist grid
///
/// Removing an item refetches the list once the server answers; a
/// failed removal is reported above the grid.
#[component]
pub fn Wishlist() -> impl IntoView {
    let remove = ServerAction::<RemoveFromWishlist>::new();
    let items = Resource::new(move || remove.version().get(), |_| list_wishlist());

    let remove_error = move || {
        remove.value().get().and_then(Result::err).map(|e| view! {
            <p class="mb-6 text-sm text-red-600">{action_error_message(&e, "edit your wishlist")}</p>
        })
    };

    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"My wishlist"</h1>
            {remove_error}

            <Transition fallback=move || view! { <Loading message="Loading wishlist..." /> }>
                {move || {
                    match items.get() {
                        None => view! { <Loading message="Loading wishlist..." /> }.into_any(),
                        Some(Err(e)) if is_not_authenticated(&e) => {
                            view! { <SignInPrompt what="your wishlist" /> }.into_any()
                        }
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(list)) if list.is_empty() => view! {
                            <EmptyState
                                icon="♡"
                                title="Your wishlist is empty"
                                message="Save products you like and find them here later."
                            />
                        }.into_any(),
                        Some(Ok(list)) => view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                {list.into_iter().map(|item| {
                                    let product_id = item.product.id;
                                    view! {
                                        <ProductCard product=item.product>
                                            <button
                                                type="button"
                                                class="text-sm text-red-600 hover:underline"
                                                on:click=move |_| {
                                                    remove.dispatch(RemoveFromWishlist { product_id });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </ProductCard>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any(),
                    }
                }}
            </Transition>
        </section>
    }
}

// web_app/components/orders.rs - The signed-in user's order history

use leptos::prelude::*;

use crate::web_app::components::common::*;
use crate::web_app::model::{is_not_authenticated, Order, OrderStatus};
use crate::web_app::server_fns::list_orders;

pub fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "yellow",
        OrderStatus::Paid => "blue",
        OrderStatus::Shipped => "blue",
        OrderStatus::Delivered => "green",
        OrderStatus::Cancelled => "red",
    }
}

#[component]
pub fn Orders() -> impl IntoView {
    let orders = Resource::new(|| (), |_| list_orders());

    view! {
        <section class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"My orders"</h1>

            <Suspense fallback=move || view! { <Loading message="Loading orders..." /> }>
                {move || {
                    match orders.get() {
                        None => view! { <Loading message="Loading orders..." /> }.into_any(),
                        Some(Err(e)) if is_not_authenticated(&e) => {
                            view! { <SignInPrompt what="your orders" /> }.into_any()
                        }
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(list)) if list.is_empty() => view! {
                            <EmptyState
                                icon="🧾"
                                title="No orders yet"
                                message="When you place an order it will show up here."
                            />
                        }.into_any(),
                        Some(Ok(list)) => view! {
                            <div class="flex flex-col gap-6">
                                {list.into_iter().map(|order| view! { <OrderCard order=order /> }).collect_view()}
                            </div>
                        }.into_any(),
                    }
                }}
            </Suspense>
        </section>
    }
}

#[component]
pub fn OrderCard(order: Order) -> impl IntoView {
    let total = order.total();
    let item_count = order.item_count();

    view! {
        <article class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <header class="flex flex-wrap items-center justify-between gap-4 mb-4">
                <div>
                    <h2 class="font-bold text-gray-900">{format!("Order #{}", order.id)}</h2>
                    <span class="text-sm text-gray-500">
                        {order.created_at.format("%B %-d, %Y").to_string()}
                    </span>
                </div>
                <Badge variant=status_variant(order.status)>{order.status.to_string()}</Badge>
            </header>

            <ul class="divide-y divide-gray-100">
                {order.items.into_iter().map(|item| {
                    let subtotal = item.subtotal();
                    view! {
                        <li class="py-3 flex justify-between text-sm">
                            <span class="text-gray-700">
                                {format!("{} × {}", item.quantity, item.title)}
                            </span>
                            <PriceDisplay price=subtotal />
                        </li>
                    }
                }).collect_view()}
            </ul>

            <footer class="flex justify-between items-center pt-4 border-t border-gray-100 mt-2">
                <span class="text-sm text-gray-500">
                    {if item_count == 1 { "1 item".to_string() } else { format!("{} items", item_count) }}
                </span>
                <PriceDisplay price=total highlight=true />
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(OrderStatus::Delivered), "green");
        assert_eq!(status_variant(OrderStatus::Cancelled), "red");
        assert_eq!(status_variant(OrderStatus::Pending), "yellow");
        assert_eq!(badge_class(status_variant(OrderStatus::Shipped)), badge_class("blue"));
    }
}

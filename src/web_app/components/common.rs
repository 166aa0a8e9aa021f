// web_app/components/common.rs - Shared storefront widgets
//
// Small, stateless building blocks shared by the collaborator
// components. They receive all data via props.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::model::is_not_authenticated;

/// Spinner shown while a resource is in flight
#[component]
pub fn Loading(
    /// Text under the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-indigo-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Failed server call, shown in place of the content it was loading
#[component]
pub fn ErrorDisplay(
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Shown in place of account content when nobody is signed in
#[component]
pub fn SignInPrompt(
    /// What the visitor would see after signing in, e.g. "your orders"
    what: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">"🔒"</div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">"Please sign in"</h3>
            <p class="text-gray-500 max-w-md mx-auto">
                {format!("Sign in to see {}.", what)}
            </p>
        </div>
    }
}

/// Empty-state panel
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">{icon}</div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-500 max-w-md mx-auto">{message}</p>
            <a href="/products" class="inline-block mt-6 text-indigo-600 font-medium hover:underline">
                "Browse products"
            </a>
        </div>
    }
}

/// Message for a failed wishlist action
///
/// `what` completes "Sign in to ..." when nobody is signed in.
pub fn action_error_message(err: &ServerFnError, what: &str) -> String {
    if is_not_authenticated(err) {
        format!("Sign in to {}", what)
    } else {
        err.to_string()
    }
}

/// Tailwind classes for a badge colour
pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Pill label for categories, discounts and order states
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// Star counts for a 0-5 rating: (full, has_half, empty)
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let has_half = (rating - rating.floor()) >= 0.5;
    let empty = 5 - full - usize::from(has_half);
    (full, has_half, empty)
}

/// Five-star rating row
#[component]
pub fn StarRating(
    /// Average rating, clamped to 0..=5
    rating: f64,
    /// Number of reviews, shown next to the stars
    #[prop(optional)]
    review_count: Option<usize>,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200">"★"</span>
            }).collect_view()}

            {review_count.map(|count| view! {
                <span class="ml-2 text-xs text-gray-500">{format!("({})", count)}</span>
            })}
        </div>
    }
}

pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

/// Dollar amount with two decimals
#[component]
pub fn PriceDisplay(
    price: Decimal,
    /// Larger, bolder rendering for the price a customer pays
    #[prop(default = false)]
    highlight: bool,
    /// Struck-through rendering for a list price under a discount
    #[prop(default = false)]
    struck: bool,
) -> impl IntoView {
    let class = if struck {
        "text-sm text-gray-400 line-through"
    } else if highlight {
        "text-xl font-bold text-green-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format_price(price)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_counts() {
        let cases: [(f64, usize, bool, usize); 8] = [
            (0.0, 0, false, 5),
            (0.5, 0, true, 4),
            (2.4, 2, false, 3),
            (3.5, 3, true, 1),
            (4.0, 4, false, 1),
            (4.75, 4, true, 0),
            (5.0, 5, false, 0),
            (7.0, 5, false, 0), // clamped
        ];
        for (rating, full, half, empty) in cases {
            assert_eq!(star_counts(rating), (full, half, empty), "rating {}", rating);
        }
    }

    #[test]
    fn test_star_counts_negative_rating() {
        assert_eq!(star_counts(-1.0), (0, false, 5));
    }

    #[test]
    fn test_action_error_message() {
        let anonymous = ServerFnError::new(crate::web_app::model::NOT_AUTHENTICATED);
        assert_eq!(action_error_message(&anonymous, "save items"), "Sign in to save items");

        let failed = ServerFnError::new("product 4 not found");
        assert!(action_error_message(&failed, "save items").contains("product 4 not found"));
    }

    #[test]
    fn test_badge_variants() {
        for (variant, expected) in [
            ("green", "bg-green-100"),
            ("red", "bg-red-100"),
            ("blue", "bg-blue-100"),
            ("yellow", "bg-yellow-100"),
            ("purple", "bg-gray-100"),
        ] {
            let class = badge_class(variant);
            assert!(class.contains(expected), "{} -> {}", variant, class);
            assert!(class.contains("rounded-full"));
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_price(Decimal::new(5, 0)), "$5.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }
}

// web_app/components/profile.rs - Profile page content
//
// ProfileWrapper loads the signed-in user's profile once and provides it
// as context; everything nested inside reads it with use_context instead
// of refetching.

use leptos::context::Provider;
use leptos::prelude::*;

use crate::web_app::components::common::*;
use crate::web_app::model::{is_not_authenticated, UserProfile};
use crate::web_app::server_fns::get_profile;

/// Loads the profile and provides it to nested content
#[component]
pub fn ProfileWrapper() -> impl IntoView {
    let profile = Resource::new(|| (), |_| get_profile());

    view! {
        <section class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <Suspense fallback=move || view! { <Loading message="Loading profile..." /> }>
                {move || {
                    match profile.get() {
                        None => view! { <Loading message="Loading profile..." /> }.into_any(),
                        Some(Err(e)) if is_not_authenticated(&e) => {
                            view! { <SignInPrompt what="your profile" /> }.into_any()
                        }
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(profile)) => view! {
                            <Provider value=profile>
                                <ProfileDetails />
                            </Provider>
                        }.into_any(),
                    }
                }}
            </Suspense>
        </section>
    }
}

/// Profile card; must be rendered under ProfileWrapper
#[component]
pub fn ProfileDetails() -> impl IntoView {
    let Some(profile) = use_context::<UserProfile>() else {
        tracing::warn!("ProfileDetails rendered without a profile in context");
        return view! { <ErrorDisplay error="Profile unavailable".to_string() /> }.into_any();
    };

    let avatar = match profile.avatar.clone() {
        Some(src) => view! {
            <img src=src alt=profile.username.clone() class="w-24 h-24 rounded-full object-cover" />
        }.into_any(),
        None => view! {
            <div class="w-24 h-24 rounded-full bg-indigo-100 text-indigo-700 text-4xl font-bold flex items-center justify-center">
                {profile.initial()}
            </div>
        }.into_any(),
    };

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-8 flex flex-col sm:flex-row gap-8 items-center">
            {avatar}
            <div class="flex-1">
                <h1 class="text-2xl font-bold text-gray-900">{profile.username.clone()}</h1>
                <p class="text-gray-500">{profile.email.clone()}</p>
                <p class="text-sm text-gray-400 mt-1">
                    {format!("Member since {}", profile.date_joined.format("%B %Y"))}
                </p>
                <div class="flex gap-4 mt-6 text-sm font-medium">
                    <a href="/orders" class="text-indigo-600 hover:underline">"My orders"</a>
                    <a href="/wishlist" class="text-indigo-600 hover:underline">"My wishlist"</a>
                </div>
            </div>
        </div>
    }
    .into_any()
}

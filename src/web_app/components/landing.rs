// web_app/components/landing.rs - Static sections of the home page

use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-r from-indigo-600 to-purple-600 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 flex flex-col items-start gap-6">
                <h1 class="text-4xl sm:text-5xl font-extrabold leading-tight max-w-2xl">
                    "Everything you love, delivered to your door"
                </h1>
                <p class="text-lg text-indigo-100 max-w-xl">
                    "Discover hand-picked products from independent sellers, with new arrivals every week."
                </p>
                <a
                    href="/products"
                    class="px-6 py-3 bg-white text-indigo-700 font-semibold rounded-lg shadow hover:bg-indigo-50 transition-colors"
                >
                    "Shop now"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn AboutUs() -> impl IntoView {
    let highlights = [
        ("🚚", "Fast delivery", "Orders ship within two business days."),
        ("🔁", "Easy returns", "Changed your mind? Send it back within 30 days."),
        ("🤝", "Independent sellers", "Every purchase supports a small business."),
    ];

    view! {
        <section id="about" class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h2 class="text-3xl font-bold text-gray-900 mb-4">"About us"</h2>
            <p class="text-gray-600 max-w-3xl mb-10">
                "We started as a small marketplace for friends who make things. \
                 Today we connect thousands of shoppers with sellers who care about what they sell."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {highlights.into_iter().map(|(icon, title, text)| view! {
                    <div class="bg-white rounded-2xl p-6 shadow-sm border border-gray-100">
                        <div class="text-3xl mb-3">{icon}</div>
                        <h3 class="font-bold text-gray-900 mb-1">{title}</h3>
                        <p class="text-sm text-gray-500">{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

// web_app/pages/about.rs - Brand story and values

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::web_app::components::SectionHeading;
use crate::web_app::content::{ABOUT_STORY, ABOUT_VALUES, BRAND_NAME, BRAND_TAGLINE};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=format!("About Us | {}", BRAND_NAME) />

        <section class="bg-gradient-to-br from-amber-700 to-red-800 text-white py-20 text-center px-6">
            <h1 class="text-4xl md:text-5xl font-serif font-bold">"Our Story"</h1>
            <p class="mt-4 text-amber-100 text-lg">{BRAND_TAGLINE}</p>
        </section>

        <section class="max-w-3xl mx-auto px-4 py-16 space-y-6 text-lg text-stone-700 leading-relaxed">
            {ABOUT_STORY.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
        </section>

        <section class="bg-amber-50 py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="What We Stand For" />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ABOUT_VALUES.iter().map(|value| view! {
                        <div class="bg-white rounded-xl p-6 shadow-sm">
                            <span class="text-3xl">{value.icon}</span>
                            <h3 class="mt-3 font-bold text-stone-900">{value.title}</h3>
                            <p class="mt-2 text-sm text-stone-600">{value.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="py-16 text-center">
            <h2 class="text-2xl font-serif font-bold text-stone-900">"Taste the difference"</h2>
            <A href="/products" attr:class="inline-block mt-6 px-8 py-3 bg-amber-600 text-white font-semibold rounded-full hover:bg-amber-700">
                "Browse Our Saffron"
            </A>
        </section>
    }
}

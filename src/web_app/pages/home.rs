// web_app/pages/home.rs - Landing page
//
// Hero carousel, featured products, brand values and the latest posts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::web_app::components::{BlogCard, HeroCarousel, ProductGrid, SectionHeading};
use crate::web_app::content::{ABOUT_VALUES, BRAND_NAME};
use crate::web_app::context::{use_app_context, use_store};

/// Posts shown in the "From the blog" strip
const LATEST_POSTS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let context = use_app_context();
    let hero = use_store(context.hero.store());
    let products = use_store(context.products.store());
    let blogs = use_store(context.blogs.store());

    Effect::new(move |_| {
        let hero = context.hero.clone();
        let products = context.products.clone();
        let blogs = context.blogs.clone();
        spawn_local(async move {
            hero.fetch_hero_sections().await;
        });
        spawn_local(async move {
            products.fetch_featured_products().await;
        });
        spawn_local(async move {
            blogs.fetch_blogs().await;
        });
    });

    let slides = Signal::derive(move || hero.with(|s| s.slides.clone()));
    let featured = Signal::derive(move || products.with(|s| s.featured.clone()));
    let latest = move || {
        blogs.with(|s| {
            s.blogs
                .iter()
                .filter(|b| b.is_published)
                .take(LATEST_POSTS)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Title text=format!("{} | Pure Kashmiri Saffron", BRAND_NAME) />

        <HeroCarousel slides=slides />

        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <SectionHeading title="Featured Saffron" subtitle="Hand-picked favourites from this season's harvest" />
            <ProductGrid products=featured empty_message="Featured products will appear here soon." />
            <div class="text-center mt-10">
                <A href="/products" attr:class="inline-block px-8 py-3 border-2 border-amber-600 text-amber-700 font-semibold rounded-full hover:bg-amber-600 hover:text-white transition-colors">
                    "View All Products"
                </A>
            </div>
        </section>

        <section class="bg-amber-50 py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Why Our Saffron" />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {ABOUT_VALUES.iter().map(|value| view! {
                        <div class="bg-white rounded-xl p-6 shadow-sm text-center">
                            <span class="text-4xl">{value.icon}</span>
                            <h3 class="mt-4 font-bold text-stone-900">{value.title}</h3>
                            <p class="mt-2 text-sm text-stone-600">{value.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <Show when=move || !latest().is_empty()>
            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <SectionHeading title="From the Blog" subtitle="Recipes, grading guides and stories from the valley" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <For each=latest key=|blog| blog.id.clone() let:blog>
                        <BlogCard blog=blog />
                    </For>
                </div>
            </section>
        </Show>
    }
}

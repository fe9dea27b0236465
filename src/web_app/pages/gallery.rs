// web_app/pages/gallery.rs - Photo gallery with category filter and lightbox

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::web_app::components::{ImageLightbox, MasonryGrid, SectionHeading};
use crate::web_app::content::{gallery_for, BRAND_NAME};
use crate::web_app::context::{use_app_context, use_store};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let context = use_app_context();
    let categories_store = context.categories.clone();
    let categories = use_store(categories_store.store());

    Effect::new(move |_| {
        let categories_store = categories_store.clone();
        spawn_local(async move {
            categories_store.fetch_gallery_categories().await;
        });
    });

    let selected = RwSignal::new(None::<String>);
    let images = Signal::derive(move || selected.with(|c| gallery_for(c.as_deref())));
    let open_at = RwSignal::new(None::<usize>);

    let filter_class = move |active: bool| {
        if active {
            "px-4 py-2 rounded-full bg-amber-600 text-white font-medium"
        } else {
            "px-4 py-2 rounded-full bg-white border border-stone-200 text-stone-700 hover:border-amber-400"
        }
    };

    view! {
        <Title text=format!("Gallery | {}", BRAND_NAME) />

        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <SectionHeading title="From Flower to Thread" subtitle="A season on our farms, in pictures" />

            <div class="flex flex-wrap justify-center gap-2 mb-10">
                <button
                    type="button"
                    class=move || filter_class(selected.with(Option::is_none))
                    on:click=move |_| selected.set(None)
                >
                    "All"
                </button>
                {move || categories.with(|c| c.gallery_categories.clone()).into_iter().map(|category| {
                    let slug = category.slug.clone();
                    let active_slug = category.slug.clone();
                    view! {
                        <button
                            type="button"
                            class=move || filter_class(selected.with(|s| s.as_deref() == Some(active_slug.as_str())))
                            on:click=move |_| selected.set(Some(slug.clone()))
                        >
                            {category.name}
                        </button>
                    }
                }).collect_view()}
            </div>

            <MasonryGrid images=images on_select=Callback::new(move |index| open_at.set(Some(index))) />
        </div>

        {move || open_at.get().map(|index| view! {
            <ImageLightbox
                images=images.get_untracked()
                start_index=index
                on_close=Callback::new(move |()| open_at.set(None))
            />
        })}
    }
}

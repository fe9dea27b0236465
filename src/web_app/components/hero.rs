// web_app/components/hero.rs - Home page hero carousel

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::content::{BRAND_NAME, BRAND_TAGLINE};
use crate::web_app::model::HeroSection;
use crate::web_app::ui::carousel::AUTOPLAY_INTERVAL;
use crate::web_app::ui::CarouselState;

/// Rotating hero slides; autoplay pauses while the pointer is over it
///
/// With no slides a static brand banner is shown instead.
#[component]
pub fn HeroCarousel(
    #[prop(into)]
    slides: Signal<Vec<HeroSection>>,
) -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(slides.with_untracked(Vec::len)));

    Effect::new(move |_| {
        let len = slides.with(Vec::len);
        carousel.update(|c| c.set_len(len));
    });

    let autoplay = StoredValue::new(None::<IntervalHandle>);
    Effect::new(move |_| {
        match set_interval_with_handle(
            move || {
                carousel.try_update(|c| c.tick());
            },
            AUTOPLAY_INTERVAL,
        ) {
            Ok(handle) => autoplay.set_value(Some(handle)),
            Err(e) => tracing::warn!("Carousel autoplay unavailable: {:?}", e),
        }
    });
    on_cleanup(move || {
        if let Some(handle) = autoplay.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <Show
            when=move || !slides.with(Vec::is_empty)
            fallback=|| view! {
                <section class="relative h-[70vh] bg-gradient-to-br from-amber-700 via-amber-600 to-red-800 flex items-center justify-center text-center text-white px-6">
                    <div>
                        <h1 class="text-4xl md:text-6xl font-serif font-bold">{BRAND_NAME}</h1>
                        <p class="mt-4 text-lg md:text-xl text-amber-100">{BRAND_TAGLINE}</p>
                        <A href="/products" attr:class="inline-block mt-8 px-8 py-3 bg-white text-amber-800 font-semibold rounded-full shadow hover:bg-amber-50">
                            "Shop Saffron"
                        </A>
                    </div>
                </section>
            }
        >
            <section
                class="relative h-[70vh] overflow-hidden bg-stone-900"
                on:mouseenter=move |_| carousel.update(|c| c.paused = true)
                on:mouseleave=move |_| carousel.update(|c| c.paused = false)
            >
                {move || slides.get().into_iter().enumerate().map(|(index, slide)| {
                    view! {
                        <div
                            class="absolute inset-0 transition-opacity duration-1000"
                            class:opacity-100=move || carousel.with(|c| c.current == index)
                            class:opacity-0=move || carousel.with(|c| c.current != index)
                            aria-hidden=move || (carousel.with(|c| c.current != index)).to_string()
                        >
                            <img class="w-full h-full object-cover" src=slide.image.clone() alt=slide.title.clone() />
                            <div class="absolute inset-0 bg-black/45 flex items-center">
                                <div class="max-w-7xl mx-auto px-6 lg:px-8 text-white max-w-2xl">
                                    {slide.subtitle.clone().map(|s| view! {
                                        <p class="uppercase tracking-widest text-amber-300 text-sm font-semibold mb-3">{s}</p>
                                    })}
                                    <h1 class="text-4xl md:text-6xl font-serif font-bold leading-tight">{slide.title.clone()}</h1>
                                    {slide.description.clone().map(|d| view! {
                                        <p class="mt-4 text-lg text-stone-200">{d}</p>
                                    })}
                                    <div class="mt-8 flex gap-4 flex-wrap">
                                        {slide.cta_text.clone().map(|text| view! {
                                            <a href=slide.cta_link.clone().unwrap_or_else(|| "/products".to_string())
                                                class="px-8 py-3 bg-amber-600 hover:bg-amber-700 rounded-full font-semibold shadow">
                                                {text}
                                            </a>
                                        })}
                                        {slide.secondary_cta_text.clone().map(|text| view! {
                                            <a href=slide.secondary_cta_link.clone().unwrap_or_else(|| "/about".to_string())
                                                class="px-8 py-3 border-2 border-white hover:bg-white hover:text-stone-900 rounded-full font-semibold">
                                                {text}
                                            </a>
                                        })}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}

                <button
                    type="button"
                    class="absolute left-4 top-1/2 -translate-y-1/2 w-12 h-12 rounded-full bg-white/20 hover:bg-white/40 text-white text-2xl"
                    aria-label="Previous slide"
                    on:click=move |_| carousel.update(|c| c.previous())
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="absolute right-4 top-1/2 -translate-y-1/2 w-12 h-12 rounded-full bg-white/20 hover:bg-white/40 text-white text-2xl"
                    aria-label="Next slide"
                    on:click=move |_| carousel.update(|c| c.next())
                >
                    "›"
                </button>

                <div class="absolute bottom-6 inset-x-0 flex justify-center gap-2">
                    {move || (0..slides.with(Vec::len)).map(|index| view! {
                        <button
                            type="button"
                            class="w-3 h-3 rounded-full bg-white/50"
                            class:bg-white=move || carousel.with(|c| c.current == index)
                            aria-label=format!("Go to slide {}", index + 1)
                            on:click=move |_| carousel.update(|c| c.go_to(index))
                        ></button>
                    }).collect_view()}
                </div>
            </section>
        </Show>
    }
}

// web_app/components/gallery.rs - Image lightbox and masonry grid
//
// Both components keep their interaction state in the framework-free types
// from `ui::lightbox` and `ui::masonry`; this file only wires DOM events.

use leptos::ev;
use leptos::prelude::*;

use crate::web_app::ui::masonry::columns_for_width;
use crate::web_app::ui::{GalleryImage, KeyOutcome, LightboxState, MasonryLayout};

/// Column count rendered on the server, before the viewport is known
const SSR_COLUMNS: usize = 3;

/// Full-screen viewer with keyboard, wheel and drag controls
///
/// Arrow keys cycle the images, Escape closes, `+`/`-` zoom, `r` rotates
/// and `0` resets. The key listener is attached to the window for as long
/// as the lightbox is mounted.
#[component]
pub fn ImageLightbox(
    images: Vec<GalleryImage>,
    #[prop(default = 0)]
    start_index: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let lightbox = RwSignal::new(LightboxState::new(images.len(), start_index));
    let images = StoredValue::new(images);

    let key_listener = StoredValue::new(None::<WindowListenerHandle>);
    Effect::new(move |_| {
        let handle = window_event_listener(ev::keydown, move |ev| {
            match lightbox.try_update(|l| l.handle_key(&ev.key())) {
                Some(KeyOutcome::Close) => on_close.run(()),
                Some(KeyOutcome::Handled) => ev.prevent_default(),
                _ => {}
            }
        });
        key_listener.set_value(Some(handle));
    });
    on_cleanup(move || {
        key_listener.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
    });

    let current = move || {
        let index = lightbox.with(|l| l.current_index);
        images.with_value(|imgs| imgs.get(index).cloned())
    };
    let count = images.with_value(Vec::len);
    let tool_class = "w-10 h-10 rounded-full bg-white/10 hover:bg-white/20 text-white text-lg flex items-center justify-center";

    view! {
        <div class="fixed inset-0 z-50 bg-black/90 flex flex-col select-none" role="dialog" aria-modal="true">
            // Toolbar
            <div class="flex items-center justify-between px-6 py-4 text-white">
                <span class="text-sm font-medium">
                    {move || format!("{} / {}", lightbox.with(|l| l.current_index) + 1, count)}
                </span>
                <div class="flex items-center gap-2">
                    <button type="button" class=tool_class title="Zoom out" on:click=move |_| lightbox.update(|l| l.zoom_out())>"−"</button>
                    <span class="w-14 text-center text-sm">{move || format!("{}%", lightbox.with(|l| l.zoom_percent()))}</span>
                    <button type="button" class=tool_class title="Zoom in" on:click=move |_| lightbox.update(|l| l.zoom_in())>"+"</button>
                    <button type="button" class=tool_class title="Rotate" on:click=move |_| lightbox.update(|l| l.rotate())>"⟳"</button>
                    <button type="button" class=tool_class title="Reset" on:click=move |_| lightbox.update(|l| l.reset_view())>"⤢"</button>
                    <button type="button" class=tool_class title="Close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
            </div>

            // Stage
            <div class="relative flex-1 flex items-center justify-center overflow-hidden">
                <Show when=move || { count > 1 }>
                    <button
                        type="button"
                        class="absolute left-4 z-10 w-12 h-12 rounded-full bg-white/10 hover:bg-white/20 text-white text-2xl"
                        title="Previous"
                        on:click=move |_| lightbox.update(|l| l.previous())
                    >
                        "‹"
                    </button>
                </Show>

                <img
                    class="max-h-[80vh] max-w-[90vw] object-contain transition-transform duration-150"
                    class:cursor-grab=move || lightbox.with(|l| l.is_zoomed() && !l.is_dragging())
                    class:cursor-grabbing=move || lightbox.with(|l| l.is_dragging())
                    src=move || current().map(|img| img.src).unwrap_or_default()
                    alt=move || current().map(|img| img.alt).unwrap_or_default()
                    style:transform=move || lightbox.with(|l| l.transform())
                    draggable="false"
                    on:mousedown=move |ev: ev::MouseEvent| {
                        lightbox.update(|l| l.begin_drag(f64::from(ev.client_x()), f64::from(ev.client_y())));
                    }
                    on:mousemove=move |ev: ev::MouseEvent| {
                        if lightbox.with_untracked(|l| l.is_dragging()) {
                            lightbox.update(|l| l.drag_to(f64::from(ev.client_x()), f64::from(ev.client_y())));
                        }
                    }
                    on:mouseup=move |_| lightbox.update(|l| l.end_drag())
                    on:mouseleave=move |_| lightbox.update(|l| l.end_drag())
                    on:wheel=move |ev: ev::WheelEvent| {
                        ev.prevent_default();
                        lightbox.update(|l| l.wheel(ev.delta_y()));
                    }
                />

                <Show when=move || { count > 1 }>
                    <button
                        type="button"
                        class="absolute right-4 z-10 w-12 h-12 rounded-full bg-white/10 hover:bg-white/20 text-white text-2xl"
                        title="Next"
                        on:click=move |_| lightbox.update(|l| l.next())
                    >
                        "›"
                    </button>
                </Show>
            </div>

            // Caption and thumbnails
            <div class="px-6 py-4 text-center text-stone-300 text-sm">
                {move || current().map(|img| img.alt).unwrap_or_default()}
            </div>
            <Show when=move || { count > 1 }>
                <div class="flex justify-center gap-2 pb-6 overflow-x-auto">
                    {images.with_value(|imgs| imgs.iter().enumerate().map(|(index, img)| {
                        let src = img.src.clone();
                        let alt = img.alt.clone();
                        view! {
                            <button
                                type="button"
                                class="w-16 h-16 rounded overflow-hidden border-2 border-transparent opacity-60 hover:opacity-100"
                                class:border-amber-400=move || lightbox.with(|l| l.current_index == index)
                                on:click=move |_| lightbox.update(|l| l.go_to(index))
                            >
                                <img class="w-full h-full object-cover" src=src alt=alt />
                            </button>
                        }
                    }).collect_view())}
                </div>
            </Show>
        </div>
    }
}

/// Gallery grid that packs images into the shortest column
///
/// The column count follows the viewport width and is recomputed on resize.
#[component]
pub fn MasonryGrid(
    #[prop(into)]
    images: Signal<Vec<GalleryImage>>,
    /// Called with the index of the clicked image
    on_select: Callback<usize>,
) -> impl IntoView {
    let columns = RwSignal::new(SSR_COLUMNS);

    let resize_listener = StoredValue::new(None::<WindowListenerHandle>);
    Effect::new(move |_| {
        let measure = move || {
            if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
                columns.set(columns_for_width(width));
            }
        };
        measure();
        resize_listener.set_value(Some(window_event_listener(ev::resize, move |_| measure())));
    });
    on_cleanup(move || {
        resize_listener.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
    });

    view! {
        <div class="flex gap-4 items-start">
            {move || {
                let imgs = images.get();
                let layout = MasonryLayout::for_images(&imgs, columns.get());
                layout.columns.into_iter().map(|column| {
                    let items = column.into_iter().filter_map(|index| {
                        imgs.get(index).cloned().map(|img| view! {
                            <button
                                type="button"
                                class="group relative block w-full overflow-hidden rounded-xl shadow-sm hover:shadow-lg transition-shadow"
                                on:click=move |_| on_select.run(index)
                            >
                                <img
                                    class="w-full h-auto transform group-hover:scale-105 transition-transform duration-500"
                                    src=img.src
                                    alt=img.alt.clone()
                                    loading="lazy"
                                    style=img.width.zip(img.height).map(|(w, h)| format!("aspect-ratio: {} / {}", w, h))
                                />
                                <span class="absolute inset-x-0 bottom-0 p-3 text-left text-sm text-white bg-gradient-to-t from-black/60 opacity-0 group-hover:opacity-100 transition-opacity">
                                    {img.alt}
                                </span>
                            </button>
                        })
                    }).collect_view();
                    view! { <div class="flex-1 min-w-0 flex flex-col gap-4">{items}</div> }
                }).collect_view()
            }}
        </div>
    }
}

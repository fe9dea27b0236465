// web_app/pages/products.rs - Catalog and product detail pages
//
// Both pages drive the shared ProductsStore from AppContext; the catalog
// filters (category, search, page) live in the store so navigating away
// and back keeps them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::web_app::components::{
    ErrorDisplay, Loading, NotFoundView, Pagination, ProductDetail, ProductGrid, RefreshErrorBanner, SelectString,
    TextInput,
};
use crate::web_app::content::BRAND_NAME;
use crate::web_app::context::{use_app_context, use_store};
use crate::web_app::ui::format::truncate;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let context = use_app_context();
    let store = context.products.clone();
    let categories_store = context.categories.clone();
    let state = use_store(store.store());
    let categories = use_store(categories_store.store());

    {
        let store = store.clone();
        Effect::new(move |_| {
            let store = store.clone();
            let categories_store = categories_store.clone();
            spawn_local(async move {
                categories_store.fetch_product_categories().await;
            });
            spawn_local(async move {
                store.fetch_products().await;
            });
        });
    }

    let search = RwSignal::new(state.with_untracked(|s| s.filters.search_query.clone()));

    let on_search = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let store = store.clone();
            let query = search.get_untracked();
            spawn_local(async move { store.set_search(query).await });
        }
    };

    let on_category = {
        let store = store.clone();
        Callback::new(move |slug: String| {
            let store = store.clone();
            let category = Some(slug).filter(|s| !s.is_empty());
            spawn_local(async move { store.set_category(category).await });
        })
    };

    let on_page = {
        let store = store.clone();
        Callback::new(move |page: u32| {
            let store = store.clone();
            spawn_local(async move { store.set_page(page).await });
        })
    };

    let on_clear = {
        let store = store.clone();
        move |_| {
            search.set(String::new());
            let store = store.clone();
            spawn_local(async move { store.clear_filters().await });
        }
    };

    let on_retry = {
        let store = store.clone();
        Callback::new(move |()| {
            let store = store.clone();
            spawn_local(async move { store.fetch_products().await });
        })
    };

    let category_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All Categories".to_string())];
        categories.with(|c| {
            options.extend(c.product_categories.iter().map(|cat| (cat.slug.clone(), cat.name.clone())));
        });
        options
    });
    let selected_category = Signal::derive(move || state.with(|s| s.filters.selected_category.clone().unwrap_or_default()));
    let products = Signal::derive(move || state.with(|s| s.products.clone()));
    let pagination = Signal::derive(move || state.with(|s| s.filters.pagination));
    let stale_error = Signal::derive(move || state.with(|s| s.error.clone().filter(|_| !s.products.is_empty())));

    view! {
        <Title text=format!("Shop Saffron | {}", BRAND_NAME) />

        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <header class="mb-8">
                <h1 class="text-4xl font-serif font-bold text-stone-900">"Our Saffron"</h1>
                <p class="mt-2 text-stone-600">"Premium grades, sourced directly from Kashmir"</p>
            </header>

            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-stone-100 flex flex-col md:flex-row gap-4 md:items-center">
                <form class="flex-1 flex gap-2" on:submit=on_search>
                    <TextInput value=search placeholder="Search saffron..." input_type="search" name="search" />
                    <button type="submit" class="px-5 py-2 bg-amber-600 text-white rounded-lg hover:bg-amber-700 font-semibold">
                        "Search"
                    </button>
                </form>
                <SelectString value=selected_category options=category_options on_change=on_category />
                <Show when=move || state.with(|s| s.filters.is_filtered())>
                    <button type="button" class="text-sm text-amber-700 underline" on:click=on_clear.clone()>
                        "Clear filters"
                    </button>
                </Show>
            </section>

            {move || {
                let (loading, error, empty) = state.with(|s| (s.loading, s.error.clone(), s.products.is_empty()));
                match (loading, error) {
                    (true, _) if empty => view! { <Loading message="Loading products..." /> }.into_any(),
                    (false, Some(error)) if empty => view! { <ErrorDisplay error=error on_retry=on_retry /> }.into_any(),
                    _ => view! {
                        <RefreshErrorBanner error=stale_error on_retry=on_retry />
                        <div class:opacity-60=move || state.with(|s| s.loading)>
                            <ProductGrid products=products />
                            <Pagination pagination=pagination on_page=on_page />
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let context = use_app_context();
    let store = context.products.clone();
    let state = use_store(store.store());
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").map(|s| s.to_string())).unwrap_or_default());

    {
        let store = store.clone();
        Effect::new(move |_| {
            let slug = slug.get();
            if slug.is_empty() {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                store.fetch_product(&slug).await;
                store.record_view(&slug).await;
            });
        });
    }

    let on_retry = Callback::new(move |()| {
        let store = store.clone();
        let slug = slug.get_untracked();
        spawn_local(async move { store.fetch_product(&slug).await });
    });

    let whatsapp_number = context.config.whatsapp_number.clone();
    let site_url = context.config.site_url.clone();

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            {move || {
                let current = state.with(|s| s.current_product.clone().filter(|p| p.slug == slug.get()));
                let (loading, not_found, error) =
                    state.with(|s| (s.detail_loading, s.not_found, s.detail_error.clone()));
                match (current, error) {
                    (Some(product), _) => {
                        let title = format!("{} | {}", product.name, BRAND_NAME);
                        let description = truncate(product.summary(), 155);
                        view! {
                            <Title text=title />
                            <Meta name="description" content=description />
                            <ProductDetail
                                product=product
                                whatsapp_number=whatsapp_number.clone()
                                site_url=site_url.clone()
                            />
                        }
                        .into_any()
                    }
                    (None, _) if not_found => view! {
                        <Title text="Product Not Found" />
                        <NotFoundView title="Product not found" back_href="/products" back_label="Back to Products" />
                    }
                    .into_any(),
                    (None, Some(error)) if !loading => view! { <ErrorDisplay error=error on_retry=on_retry /> }.into_any(),
                    _ => view! { <Loading message="Loading product..." /> }.into_any(),
                }
            }}
        </div>
    }
}

// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card for the catalog and the featured strip
// - PriceTag: Price with the struck-through original when discounted
// - ProductDetail: Full product page body with gallery and specifications
// - ProductGrid: Grid layout for multiple products

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::components::A;

use super::common::{Badge, StarRating};
use super::gallery::ImageLightbox;
use crate::web_app::model::Product;
use crate::web_app::ui::format::{humanize_key, spec_value, truncate};
use crate::web_app::ui::links::{absolute_url, product_enquiry, whatsapp_link};
use crate::web_app::ui::{GalleryImage, PriceView};

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-saffron.jpg";

pub fn product_href(slug: &str) -> String {
    format!("/products/{}", slug)
}

pub fn stock_label(in_stock: bool, quantity: Option<u32>) -> String {
    match (in_stock, quantity) {
        (false, _) | (true, Some(0)) => "Out of Stock".to_string(),
        (true, Some(q)) if q <= 5 => format!("Only {} left", q),
        (true, _) => "In Stock".to_string(),
    }
}

/// Price block; the original price is struck through when discounted
#[component]
pub fn PriceTag(
    price: PriceView,
    /// Larger type for the product page
    #[prop(default = false)]
    large: bool,
) -> impl IntoView {
    let (price_class, original_class) = if large {
        ("text-3xl font-bold text-amber-700", "text-lg text-stone-400 line-through")
    } else {
        ("text-lg font-bold text-amber-700", "text-sm text-stone-400 line-through")
    };

    view! {
        <div class="flex items-baseline gap-2 flex-wrap">
            <span class=price_class>{price.price}</span>
            {price.original.map(|original| view! { <del class=original_class>{original}</del> })}
            {price.discount_percent.map(|pct| view! {
                <span class="text-xs font-semibold text-green-700 bg-green-100 px-2 py-0.5 rounded-full">
                    {format!("{}% off", pct)}
                </span>
            })}
        </div>
    }
}

/// Product card for the catalog grid
///
/// The whole card links to the product page.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let price = PriceView::for_product(&product);
    let image = product.primary_image().unwrap_or(PLACEHOLDER_IMAGE).to_string();
    let summary = truncate(product.summary(), 120);
    let category = product.category.as_ref().and_then(|c| c.name()).map(str::to_string);
    let stock = stock_label(product.in_stock, product.stock_quantity);
    let stock_variant = if product.in_stock { "green" } else { "red" };

    view! {
        <A
            href=product_href(&product.slug)
            attr:class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                   transition-all duration-300 border border-stone-100 \
                   flex flex-col h-full overflow-hidden transform hover:-translate-y-1"
        >
            <div class="relative aspect-square bg-stone-100 overflow-hidden">
                <img
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                    src=image
                    alt=product.name.clone()
                    loading="lazy"
                />
                {product.is_featured.then(|| view! {
                    <span class="absolute top-3 left-3 text-xs px-2 py-1 bg-amber-500 text-white rounded-full font-medium">
                        "★ Featured"
                    </span>
                })}
            </div>

            <div class="p-5 flex flex-col flex-1">
                {category.map(|c| view! {
                    <span class="text-xs uppercase tracking-wide text-amber-700 font-semibold mb-1">{c}</span>
                })}

                <h3 class="font-bold text-stone-900 mb-2 line-clamp-2 text-lg group-hover:text-amber-700 transition-colors">
                    {product.name.clone()}
                </h3>

                <p class="text-stone-600 text-sm mb-4 line-clamp-3 flex-1">{summary}</p>

                {product.rating.map(|rating| view! {
                    <div class="mb-3"><StarRating rating=rating show_value=false /></div>
                })}

                <div class="flex justify-between items-end pt-3 border-t border-stone-100">
                    <PriceTag price=price />
                    <Badge variant=stock_variant>{stock}</Badge>
                </div>
            </div>
        </A>
    }
}

/// Grid of product cards with an empty state
#[component]
pub fn ProductGrid(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    #[prop(default = "No products found.")]
    empty_message: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(Vec::is_empty)
            fallback=move || view! {
                <div class="bg-white rounded-2xl p-12 text-center border border-stone-100">
                    <span class="text-4xl">"🌾"</span>
                    <p class="mt-4 text-stone-500">{empty_message}</p>
                </div>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <For
                    each=move || products.get()
                    key=|product| product.id.clone()
                    let:product
                >
                    <ProductCard product=product />
                </For>
            </div>
        </Show>
    }
}

/// Key/value table for the product specifications
#[component]
pub fn SpecificationsTable(specifications: BTreeMap<String, serde_json::Value>) -> impl IntoView {
    view! {
        <div class="bg-stone-50 rounded-xl p-6 space-y-2 text-sm">
            {specifications.into_iter().map(|(key, value)| view! {
                <div class="flex justify-between border-b border-stone-200 pb-2 last:border-0">
                    <span class="text-stone-500">{humanize_key(&key)}</span>
                    <span class="font-medium text-stone-900">{spec_value(&value)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Product detail body
///
/// Image gallery (opens the lightbox), price block, stock, facts,
/// specifications and the WhatsApp order button.
#[component]
pub fn ProductDetail(
    /// The product to display
    product: Product,
    /// Number the order button opens a chat with
    whatsapp_number: String,
    /// Public site root, for the link sent in the order message
    site_url: String,
) -> impl IntoView {
    let price = PriceView::for_product(&product);
    let images: Vec<String> = if product.images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        product.images.clone()
    };
    let gallery: Vec<GalleryImage> = images
        .iter()
        .map(|src| GalleryImage::new(src.clone(), product.name.clone(), String::new()))
        .collect();

    let selected = RwSignal::new(0_usize);
    let lightbox_open = RwSignal::new(false);
    let main_image = {
        let images = images.clone();
        move || images.get(selected.get()).cloned().unwrap_or_default()
    };

    let page_url = absolute_url(&site_url, &product_href(&product.slug));
    let order_link = whatsapp_link(&whatsapp_number, &product_enquiry(&product.name, &page_url));
    let category = product.category.as_ref().and_then(|c| c.name()).map(str::to_string);
    let stock = stock_label(product.in_stock, product.stock_quantity);
    let stock_variant = if product.in_stock { "green" } else { "red" };

    let facts: Vec<(&'static str, String)> = [
        ("Weight", product.weight.clone()),
        ("Origin", product.origin.clone()),
        ("Grade", product.grade.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
    .collect();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
            // Gallery
            <div class="space-y-4">
                <button
                    type="button"
                    class="block w-full aspect-square bg-stone-100 rounded-2xl overflow-hidden cursor-zoom-in"
                    on:click=move |_| lightbox_open.set(true)
                >
                    <img class="w-full h-full object-cover" src=main_image alt=product.name.clone() />
                </button>
                <Show when={
                    let count = images.len();
                    move || count > 1
                }>
                    <div class="flex gap-3 overflow-x-auto">
                        {images.iter().cloned().enumerate().map(|(index, src)| view! {
                            <button
                                type="button"
                                class="w-20 h-20 rounded-lg overflow-hidden border-2 border-transparent flex-shrink-0"
                                class:border-amber-500=move || selected.get() == index
                                on:click=move |_| selected.set(index)
                            >
                                <img class="w-full h-full object-cover" src=src alt="" />
                            </button>
                        }).collect_view()}
                    </div>
                </Show>
            </div>

            // Main info
            <div class="space-y-6">
                <div>
                    {category.map(|c| view! {
                        <span class="text-sm uppercase tracking-wide text-amber-700 font-semibold">{c}</span>
                    })}
                    <h1 class="text-3xl md:text-4xl font-serif font-bold text-stone-900 leading-tight mt-1">
                        {product.name.clone()}
                    </h1>
                </div>

                {product.rating.map(|rating| view! {
                    <div class="flex items-center gap-3">
                        <StarRating rating=rating />
                        {product.review_count.map(|n| view! {
                            <span class="text-stone-500 text-sm">{n} " reviews"</span>
                        })}
                    </div>
                })}

                <PriceTag price=price large=true />

                <Badge variant=stock_variant>{stock}</Badge>

                <p class="text-stone-700 leading-relaxed whitespace-pre-line">{product.description.clone()}</p>

                {(!facts.is_empty()).then(|| view! {
                    <dl class="grid grid-cols-3 gap-4">
                        {facts.into_iter().map(|(label, value)| view! {
                            <div class="bg-amber-50 rounded-lg p-3 text-center">
                                <dt class="text-xs text-stone-500 uppercase">{label}</dt>
                                <dd class="font-semibold text-stone-900">{value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>
                })}

                <a
                    href=order_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 px-6 py-3 bg-green-600 text-white rounded-lg hover:bg-green-700 font-semibold shadow"
                >
                    "Order on WhatsApp"
                </a>

                {(!product.tags.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-2">
                        {product.tags.iter().cloned().map(|tag| view! {
                            <Badge variant="amber">{tag}</Badge>
                        }).collect_view()}
                    </div>
                })}

                {(!product.specifications.is_empty()).then(|| view! {
                    <div>
                        <h2 class="text-xl font-bold text-stone-900 mb-3">"Specifications"</h2>
                        <SpecificationsTable specifications=product.specifications.clone() />
                    </div>
                })}
            </div>
        </div>

        <Show when=move || lightbox_open.get()>
            <ImageLightbox
                images=gallery.clone()
                start_index=selected.get_untracked()
                on_close=Callback::new(move |()| lightbox_open.set(false))
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_href() {
        assert_eq!(product_href("kashmiri-mongra"), "/products/kashmiri-mongra");
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(true, None), "In Stock");
        assert_eq!(stock_label(true, Some(40)), "In Stock");
        assert_eq!(stock_label(true, Some(3)), "Only 3 left");
        assert_eq!(stock_label(true, Some(0)), "Out of Stock");
        assert_eq!(stock_label(false, Some(10)), "Out of Stock");
    }
}

// tests/component_render_tests.rs - Server-side render checks for components
//
// Components are instantiated inside a reactive owner, the same way the app
// builds them during SSR. Components that link through the router (cards,
// navbar) are covered by their helper functions' unit tests instead.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde_json::json;

use saffron_storefront::web_app::components::*;
use saffron_storefront::web_app::model::{Pagination as PageInfo, Product};
use saffron_storefront::web_app::ui::{GalleryImage, PriceView};

fn with_runtime<F: FnOnce()>(f: F) {
    let _owner = Owner::new();
    f();
}

fn product(price: f64, original: Option<f64>) -> Product {
    serde_json::from_value(json!({
        "_id": "p1",
        "slug": "mongra-1g",
        "name": "Mongra Saffron 1g",
        "price": price,
        "originalPrice": original,
    }))
    .unwrap()
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let html = Loading(LoadingProps { message: "Loading products..." }).to_html();
        assert!(html.contains("Loading products..."));
    });
}

#[test]
fn test_error_display_without_retry() {
    with_runtime(|| {
        let html = ErrorDisplay(ErrorDisplayProps {
            error: "Network error: connection refused".to_string(),
            on_retry: None,
        })
        .to_html();
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Network error: connection refused"));
        assert!(!html.contains("Try again"));
    });
}

#[test]
fn test_error_display_with_retry() {
    with_runtime(|| {
        let html = ErrorDisplay(ErrorDisplayProps {
            error: "Products not found".to_string(),
            on_retry: Some(Callback::new(|_| {})),
        })
        .to_html();
        assert!(html.contains("Try again"));
    });
}

#[test]
fn test_refresh_error_banner_over_stale_results() {
    with_runtime(|| {
        let html = RefreshErrorBanner(RefreshErrorBannerProps {
            error: Signal::stored(Some("Service unavailable".to_string())),
            on_retry: Callback::new(|_| {}),
        })
        .to_html();
        assert!(html.contains("Showing earlier results"));
        assert!(html.contains("Service unavailable"));
        assert!(html.contains("Try again"));
        assert!(html.contains("role=\"alert\""));
    });
}

#[test]
fn test_refresh_error_banner_hidden_without_error() {
    with_runtime(|| {
        let html = RefreshErrorBanner(RefreshErrorBannerProps {
            error: Signal::stored(None),
            on_retry: Callback::new(|_| {}),
        })
        .to_html();
        assert!(!html.contains("Showing earlier results"));
        assert!(!html.contains("Try again"));
    });
}

#[test]
fn test_badge_component_instantiation() {
    with_runtime(|| {
        let _ = Badge(BadgeProps {
            children: Box::new(move || view! { "Featured" }.into_any()),
            variant: "amber",
        });
    });
}

#[test]
fn test_star_rating_counts() {
    with_runtime(|| {
        let html = StarRating(StarRatingProps {
            rating: 3.5,
            show_value: true,
        })
        .to_html();
        assert_eq!(html.matches('★').count(), 6);
        assert!(html.contains("3.5"));
    });
}

#[test]
fn test_price_tag_strikes_original_price() {
    with_runtime(|| {
        let price = PriceView::for_product(&product(750.0, Some(1000.0)));
        let html = PriceTag(PriceTagProps { price, large: false }).to_html();
        assert!(html.contains("₹750.00"));
        assert!(html.contains("<del"));
        assert!(html.contains("₹1000.00"));
        assert!(html.contains("25% off"));
    });
}

#[test]
fn test_price_tag_without_discount() {
    with_runtime(|| {
        let price = PriceView::for_product(&product(499.0, None));
        let html = PriceTag(PriceTagProps { price, large: true }).to_html();
        assert!(html.contains("₹499.00"));
        assert!(!html.contains("<del"));
        assert!(!html.contains("% off"));
    });
}

#[test]
fn test_specifications_table_humanizes_keys() {
    with_runtime(|| {
        let mut specifications = BTreeMap::new();
        specifications.insert("crocin_level".to_string(), json!(250));
        specifications.insert("lab_tested".to_string(), json!(true));
        let html = SpecificationsTable(SpecificationsTableProps { specifications }).to_html();
        assert!(html.contains("Crocin Level"));
        assert!(html.contains("250"));
        assert!(html.contains("Lab Tested"));
        assert!(html.contains("Yes"));
    });
}

#[test]
fn test_share_bar_links() {
    with_runtime(|| {
        let html = ShareBar(ShareBarProps {
            url: "https://kesarkashmir.com/blog/harvest".to_string(),
            title: "Harvest".to_string(),
        })
        .to_html();
        assert!(html.contains("facebook.com"));
        assert!(html.contains("twitter.com"));
        assert!(html.contains("linkedin.com"));
    });
}

#[test]
fn test_section_heading_subtitle() {
    with_runtime(|| {
        let html = SectionHeading(SectionHeadingProps {
            title: "Our Story",
            subtitle: Some("From the fields of Pampore"),
        })
        .to_html();
        assert!(html.contains("Our Story"));
        assert!(html.contains("From the fields of Pampore"));
    });
}

#[test]
fn test_pagination_hidden_for_single_page() {
    with_runtime(|| {
        let html = Pagination(PaginationProps {
            pagination: Signal::stored(PageInfo::default()),
            on_page: Callback::new(|_| {}),
        })
        .to_html();
        assert!(!html.contains("Next"));
    });
}

#[test]
fn test_pagination_shows_page_position() {
    with_runtime(|| {
        let page = PageInfo {
            current_page: 2,
            total_pages: 5,
            total_items: 60,
            items_per_page: 12,
        };
        let html = Pagination(PaginationProps {
            pagination: Signal::stored(page),
            on_page: Callback::new(|_| {}),
        })
        .to_html();
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    });
}

#[test]
fn test_masonry_grid_renders_every_image() {
    with_runtime(|| {
        let images = vec![
            GalleryImage::new("/images/a.jpg", "Crocus field", "harvest"),
            GalleryImage::new("/images/b.jpg", "Drying stigmas", "processing"),
            GalleryImage::new("/images/c.jpg", "Packed tins", "products").with_size(800, 600),
        ];
        let html = MasonryGrid(MasonryGridProps {
            images: Signal::stored(images),
            on_select: Callback::new(|_| {}),
        })
        .to_html();
        assert_eq!(html.matches("<img").count(), 3);
        assert!(html.contains("aspect-ratio: 800 / 600"));
    });
}

#[test]
fn test_lightbox_shows_position_and_zoom() {
    with_runtime(|| {
        let images = vec![
            GalleryImage::new("/images/a.jpg", "Crocus field", "harvest"),
            GalleryImage::new("/images/b.jpg", "Drying stigmas", "processing"),
        ];
        let html = ImageLightbox(ImageLightboxProps {
            images,
            start_index: 1,
            on_close: Callback::new(|_| {}),
        })
        .to_html();
        assert!(html.contains("/images/b.jpg"));
        assert!(html.contains("100%"));
    });
}

// web_app/content.rs - Static brand copy used by the pages
//
// Everything the REST API does not serve: navigation, the About page
// values, the pharmacy programme and the curated gallery.

use crate::web_app::ui::GalleryImage;

pub const BRAND_NAME: &str = "Kesar Kashmir";
pub const BRAND_TAGLINE: &str = "Pure Kashmiri saffron, from our fields to your kitchen";

/// Fallback WhatsApp greeting for the floating button
pub const WHATSAPP_GREETING: &str = "Hello, I would like to know more about your saffron.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Products", href: "/products" },
    NavLink { label: "Pharmacy", href: "/pharmacy" },
    NavLink { label: "Gallery", href: "/gallery" },
    NavLink { label: "Blog", href: "/blog" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Contact", href: "/contact" },
];

/// Whether `href` is the active nav entry for `path`
pub fn is_active_link(href: &str, path: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path == href || path.starts_with(&format!("{}/", href))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_STORY: [&str; 3] = [
    "Our family has farmed saffron on the karewa plateaus of Pampore for three generations.",
    "Every autumn the crocus flowers are hand-picked at dawn, and the crimson stigmas are separated and dried the same day.",
    "We grade each harvest by colour strength and aroma, and sell directly so the saffron reaches you fresh and unadulterated.",
];

pub const ABOUT_VALUES: [Feature; 4] = [
    Feature {
        icon: "🌸",
        title: "Hand Harvested",
        description: "Flowers are picked by hand at first light to protect the delicate stigmas.",
    },
    Feature {
        icon: "🔬",
        title: "Lab Tested",
        description: "Each batch is tested for crocin, picrocrocin and safranal content.",
    },
    Feature {
        icon: "🤝",
        title: "Direct From Farmers",
        description: "No middlemen: growers receive a fair price and you receive traceable saffron.",
    },
    Feature {
        icon: "📦",
        title: "Sealed For Freshness",
        description: "Packed in airtight, light-proof tins the week it is graded.",
    },
];

pub const PHARMACY_INTRO: &str = "We supply pharmaceutical and Ayurvedic manufacturers with \
     certified saffron in bulk, with full batch documentation.";

pub const PHARMACY_BENEFITS: [Feature; 4] = [
    Feature {
        icon: "📜",
        title: "Certificate Of Analysis",
        description: "ISO 3632 grading report shipped with every batch.",
    },
    Feature {
        icon: "⚖️",
        title: "Bulk Quantities",
        description: "Consistent supply from 100 g to several kilograms per order.",
    },
    Feature {
        icon: "🧪",
        title: "Extract Grade Available",
        description: "Stigma-only Category I saffron suited to extraction.",
    },
    Feature {
        icon: "🚚",
        title: "Cold Chain Logistics",
        description: "Temperature-controlled dispatch across India.",
    },
];

pub const PHARMACY_ENQUIRY: &str = "Hello, I would like a quote for pharmaceutical grade saffron.";

/// Curated gallery; categories match the slugs served by `gallery-categories`
pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new("/images/gallery/fields-dawn.jpg", "Saffron fields at dawn", "fields").with_size(1600, 1067),
        GalleryImage::new("/images/gallery/crocus-bloom.jpg", "Crocus sativus in bloom", "fields"),
        GalleryImage::new("/images/gallery/hand-picking.jpg", "Hand picking the flowers", "harvest").with_size(1080, 1350),
        GalleryImage::new("/images/gallery/baskets.jpg", "Baskets of fresh flowers", "harvest"),
        GalleryImage::new("/images/gallery/separating.jpg", "Separating the stigmas", "processing"),
        GalleryImage::new("/images/gallery/drying.jpg", "Drying the threads", "processing").with_size(1200, 800),
        GalleryImage::new("/images/gallery/grading.jpg", "Grading under the lamp", "processing"),
        GalleryImage::new("/images/gallery/tins.jpg", "Sealed tins ready to ship", "packaging").with_size(1000, 1000),
        GalleryImage::new("/images/gallery/kahwa.jpg", "Kashmiri kahwa with saffron", "kitchen"),
    ]
}

/// Gallery filtered by category slug; `None` keeps everything
pub fn gallery_for(category: Option<&str>) -> Vec<GalleryImage> {
    gallery_images()
        .into_iter()
        .filter(|image| category.is_none_or(|c| image.category == c))
        .collect()
}

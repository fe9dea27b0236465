// web_app/ui/mod.rs - Framework-free widget state and display helpers
//
// The Leptos components keep their transient state in these types so the
// interaction rules (key handling, zoom limits, column packing, price and
// listing decisions) can be unit tested without a browser.

pub mod carousel;
pub mod format;
pub mod lightbox;
pub mod links;
pub mod listing;
pub mod masonry;

pub use carousel::CarouselState;
pub use lightbox::{KeyOutcome, LightboxState};
pub use listing::{BlogListing, PriceView};
pub use masonry::{GalleryImage, MasonryLayout};

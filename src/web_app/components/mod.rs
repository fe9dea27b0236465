// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the storefront.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, Pagination, etc.)
// - layout.rs: Navbar, Footer, floating WhatsApp button
// - hero.rs: Home page carousel
// - product.rs: Product display components (ProductCard, ProductDetail)
// - blog.rs: Blog cards, featured post, share bar
// - gallery.rs: Image lightbox and masonry grid
// - toast.rs: Toast notifications

pub mod blog;
pub mod common;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod product;
pub mod toast;

// Re-export commonly used components for convenience
pub use blog::*;
pub use common::*;
pub use gallery::*;
pub use hero::*;
pub use layout::*;
pub use product::*;
pub use toast::*;

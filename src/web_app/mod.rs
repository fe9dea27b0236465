// web_app/mod.rs - Root module for the storefront web application
//
// Architecture:
// - config/error: environment configuration and the error taxonomy
// - model/: DTOs mirrored from the storefront REST API
// - api/: typed REST client wrappers (reqwest, native and WASM)
// - hooks/: the generic async-action wrapper and toast notifications
// - state/: observable per-domain stores (products, blogs, categories, hero)
// - ui/: framework-free widget state (lightbox, carousel, masonry, links)
// - content: static brand copy used by the pages
// - components/, pages/, app.rs: Leptos views (ssr and hydrate only)

pub mod config;
pub mod error;
pub mod model;
pub mod api;
pub mod hooks;
pub mod state;
pub mod ui;
pub mod content;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod context;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;

// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - HomePage, AboutPage, ContactPage, PharmacyPage, GalleryPage
// - ProductsPage / ProductDetailPage
// - BlogListPage / BlogPostPage
// - AdminCompanyDetailsPage
// - NotFoundPage

pub mod about;
pub mod admin;
pub mod blog;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod pharmacy;
pub mod products;

// Re-export page components
pub use about::AboutPage;
pub use admin::AdminCompanyDetailsPage;
pub use blog::{BlogListPage, BlogPostPage};
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pharmacy::PharmacyPage;
pub use products::{ProductDetailPage, ProductsPage};

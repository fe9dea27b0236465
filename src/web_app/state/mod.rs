// web_app/state/mod.rs - Observable client-side stores
//
// Each domain store wraps its state in a `Store<S>`: a shared, lockable
// value plus a list of subscribers notified after every change. Pages put
// the stores in Leptos context and bridge them into signals with
// `context::use_store`; tests drive them directly.

mod blogs;
mod categories;
mod filters;
mod hero;
mod products;
mod store;

pub use blogs::{BlogsState, BlogsStore};
pub use categories::{CategoriesState, CategoriesStore};
pub use filters::ListFilters;
pub use hero::{HeroState, HeroStore};
pub use products::{ProductsState, ProductsStore};
pub use store::{Store, Subscription};

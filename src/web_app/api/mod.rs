// web_app/api/mod.rs - Typed wrappers over the storefront REST API
//
// `ApiClient` does the HTTP work (reqwest, so it runs natively for SSR and
// in the browser after hydration). The per-domain traits below are the seam
// the stores depend on, which keeps the stores testable without a server.
//
// Files:
// - client.rs: ApiClient, URL building and envelope decoding
// - products.rs, blogs.rs, categories.rs, hero.rs: trait impls
// - company.rs, contact.rs: endpoints used directly by pages

mod blogs;
mod categories;
mod client;
mod company;
mod contact;
mod hero;
mod products;

pub use blogs::LikeReceipt;
pub use client::{decode_response, ApiClient};

use crate::web_app::error::ApiResult;
use crate::web_app::model::{Blog, Category, HeroSection, ListPayload, Product};

pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Query string for the paginated list endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            category: None,
            search: None,
            featured: None,
        }
    }
}

impl ListQuery {
    /// Query pairs in wire order; unset and blank filters are omitted
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }
}

#[allow(async_fn_in_trait)]
pub trait ProductsApi {
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ListPayload<Product>>;
    async fn get_product(&self, slug: &str) -> ApiResult<Product>;
    async fn record_product_view(&self, slug: &str) -> ApiResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait BlogsApi {
    async fn list_blogs(&self, query: &ListQuery) -> ApiResult<ListPayload<Blog>>;
    async fn get_blog(&self, slug: &str) -> ApiResult<Blog>;
    async fn record_blog_view(&self, slug: &str) -> ApiResult<()>;
    async fn like_blog(&self, slug: &str) -> ApiResult<LikeReceipt>;
}

#[allow(async_fn_in_trait)]
pub trait CategoriesApi {
    async fn product_categories(&self) -> ApiResult<Vec<Category>>;
    async fn blog_categories(&self) -> ApiResult<Vec<Category>>;
    async fn gallery_categories(&self) -> ApiResult<Vec<Category>>;
}

#[allow(async_fn_in_trait)]
pub trait HeroApi {
    async fn hero_sections(&self) -> ApiResult<Vec<HeroSection>>;
}

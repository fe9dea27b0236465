// common/mod.rs - Shared test utilities for the store and hook tests
//
// `FakeApi` implements every API trait the stores depend on, answering from
// in-memory fixtures. It records the list queries it receives so tests can
// assert on filter handling, can be told to fail, and can hold the next list
// request open to simulate a slow response. Likes yield once before
// answering, so two likes joined together overlap.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::json;
use tokio::sync::Notify;

use saffron_storefront::web_app::api::{BlogsApi, CategoriesApi, HeroApi, LikeReceipt, ListQuery, ProductsApi};
use saffron_storefront::web_app::error::{ApiError, ApiResult};
use saffron_storefront::web_app::model::{Blog, Category, HeroSection, ListPayload, Pagination, Product};

#[derive(Default)]
struct FakeState {
    products: Vec<Product>,
    blogs: Vec<Blog>,
    categories: Vec<Category>,
    hero: Vec<HeroSection>,
    list_queries: Vec<ListQuery>,
    viewed: Vec<String>,
    liked: Vec<String>,
    fail_with: Option<String>,
    like_count: Option<u64>,
    hold_next_list: Option<Arc<Notify>>,
}

/// In-memory stand-in for the storefront REST API
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.lock().products = products;
        self
    }

    pub fn with_blogs(self, blogs: Vec<Blog>) -> Self {
        self.lock().blogs = blogs;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.lock().categories = categories;
        self
    }

    pub fn with_hero(self, hero: Vec<HeroSection>) -> Self {
        self.lock().hero = hero;
        self
    }

    /// Like responses carry this count instead of none
    pub fn with_like_count(self, likes: u64) -> Self {
        self.lock().like_count = Some(likes);
        self
    }

    /// Every call fails with a 500 carrying `message` until `recover`
    pub fn fail(&self, message: &str) {
        self.lock().fail_with = Some(message.to_string());
    }

    pub fn recover(&self) {
        self.lock().fail_with = None;
    }

    /// The next list request waits until the returned handle is notified
    pub fn hold_next_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.lock().hold_next_list = Some(gate.clone());
        gate
    }

    pub fn list_queries(&self) -> Vec<ListQuery> {
        self.lock().list_queries.clone()
    }

    pub fn last_query(&self) -> Option<ListQuery> {
        self.lock().list_queries.last().cloned()
    }

    pub fn viewed(&self) -> Vec<String> {
        self.lock().viewed.clone()
    }

    pub fn liked(&self) -> Vec<String> {
        self.lock().liked.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn check_failure(&self) -> ApiResult<()> {
        match &self.lock().fail_with {
            Some(message) => Err(ApiError::Http {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn record_list(&self, query: &ListQuery) -> ApiResult<()> {
        let gate = {
            let mut state = self.lock();
            state.list_queries.push(query.clone());
            state.hold_next_list.take()
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.check_failure()
    }
}

fn paginate<T: Clone>(items: Vec<T>, query: &ListQuery) -> ListPayload<T> {
    let limit = query.limit.max(1);
    let total_items = items.len() as u64;
    let total_pages = (items.len() as u32).div_ceil(limit).max(1);
    let start = ((query.page.max(1) - 1) * limit) as usize;
    ListPayload {
        items: items.into_iter().skip(start).take(limit as usize).collect(),
        pagination: Pagination {
            current_page: query.page.max(1),
            total_pages,
            total_items,
            items_per_page: limit,
        },
    }
}

fn matches(name: &str, category: Option<&str>, query: &ListQuery) -> bool {
    let category_ok = query.category.as_deref().is_none_or(|wanted| category == Some(wanted));
    let search_ok = query
        .search
        .as_deref()
        .is_none_or(|term| name.to_lowercase().contains(&term.to_lowercase()));
    category_ok && search_ok
}

impl ProductsApi for FakeApi {
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ListPayload<Product>> {
        self.record_list(query).await?;
        let items = self
            .lock()
            .products
            .iter()
            .filter(|p| matches(&p.name, p.category.as_ref().and_then(|c| c.slug()), query))
            .filter(|p| query.featured.is_none_or(|featured| p.is_featured == featured))
            .cloned()
            .collect();
        Ok(paginate(items, query))
    }

    async fn get_product(&self, slug: &str) -> ApiResult<Product> {
        self.check_failure()?;
        self.lock()
            .products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Product".to_string()))
    }

    async fn record_product_view(&self, slug: &str) -> ApiResult<()> {
        self.check_failure()?;
        self.lock().viewed.push(slug.to_string());
        Ok(())
    }
}

impl BlogsApi for FakeApi {
    async fn list_blogs(&self, query: &ListQuery) -> ApiResult<ListPayload<Blog>> {
        self.record_list(query).await?;
        let items = self
            .lock()
            .blogs
            .iter()
            .filter(|b| matches(&b.title, b.category.as_ref().and_then(|c| c.slug()), query))
            .cloned()
            .collect();
        Ok(paginate(items, query))
    }

    async fn get_blog(&self, slug: &str) -> ApiResult<Blog> {
        self.check_failure()?;
        self.lock()
            .blogs
            .iter()
            .find(|b| b.slug == slug)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Blog post".to_string()))
    }

    async fn record_blog_view(&self, slug: &str) -> ApiResult<()> {
        self.check_failure()?;
        self.lock().viewed.push(slug.to_string());
        Ok(())
    }

    async fn like_blog(&self, slug: &str) -> ApiResult<LikeReceipt> {
        tokio::task::yield_now().await;
        self.check_failure()?;
        let mut state = self.lock();
        state.liked.push(slug.to_string());
        Ok(LikeReceipt { likes: state.like_count })
    }
}

impl CategoriesApi for FakeApi {
    async fn product_categories(&self) -> ApiResult<Vec<Category>> {
        self.check_failure()?;
        Ok(self.lock().categories.clone())
    }

    async fn blog_categories(&self) -> ApiResult<Vec<Category>> {
        self.check_failure()?;
        Ok(self.lock().categories.clone())
    }

    async fn gallery_categories(&self) -> ApiResult<Vec<Category>> {
        self.check_failure()?;
        Ok(self.lock().categories.clone())
    }
}

impl HeroApi for FakeApi {
    async fn hero_sections(&self) -> ApiResult<Vec<HeroSection>> {
        self.check_failure()?;
        Ok(self.lock().hero.clone())
    }
}

// ===== Fixtures =====

pub fn category(slug: &str, order: i32, active: bool) -> Category {
    serde_json::from_value(json!({
        "_id": format!("cat-{}", slug),
        "name": slug.replace('-', " "),
        "slug": slug,
        "isActive": active,
        "order": order,
    }))
    .unwrap()
}

pub fn product(slug: &str, name: &str, category_slug: &str, price: u32) -> Product {
    serde_json::from_value(json!({
        "_id": format!("prod-{}", slug),
        "slug": slug,
        "name": name,
        "description": format!("{} from the Pampore fields", name),
        "price": price,
        "category": { "_id": format!("cat-{}", category_slug), "name": category_slug, "slug": category_slug },
        "images": [format!("/images/{}.jpg", slug)],
    }))
    .unwrap()
}

pub fn featured_product(slug: &str, name: &str, category_slug: &str, price: u32) -> Product {
    let mut product = product(slug, name, category_slug, price);
    product.is_featured = true;
    product
}

/// The catalog most store tests run against
pub fn sample_catalog() -> Vec<Product> {
    vec![
        featured_product("mongra-1g", "Mongra Saffron 1g", "threads", 499),
        featured_product("mongra-5g", "Mongra Saffron 5g", "threads", 2299),
        product("lacha-2g", "Lacha Saffron 2g", "threads", 799),
        product("saffron-honey", "Saffron Honey", "infused", 650),
        product("saffron-tea", "Saffron Kahwa Tea", "infused", 350),
    ]
}

pub fn blog(slug: &str, title: &str, category_slug: &str, likes: u64) -> Blog {
    serde_json::from_value(json!({
        "_id": format!("blog-{}", slug),
        "slug": slug,
        "title": title,
        "excerpt": format!("{} in brief", title),
        "content": "<p>Saffron is harvested by hand every autumn.</p>",
        "category": { "_id": format!("cat-{}", category_slug), "name": category_slug, "slug": category_slug },
        "isPublished": true,
        "likes": likes,
        "publishedAt": "2024-10-28T08:00:00Z",
    }))
    .unwrap()
}

pub fn sample_posts() -> Vec<Blog> {
    vec![
        blog("harvest-season", "The Harvest Season in Pampore", "stories", 10),
        blog("spotting-fake-saffron", "Spotting Fake Saffron", "guides", 4),
        blog("saffron-milk", "Saffron Milk for Winter", "recipes", 0),
    ]
}

pub fn hero(id: &str, order: i32, active: bool) -> HeroSection {
    serde_json::from_value(json!({
        "_id": id,
        "title": format!("Slide {}", id),
        "image": format!("/images/hero-{}.jpg", id),
        "order": order,
        "isActive": active,
    }))
    .unwrap()
}

use std::sync::Arc;

use super::{ListFilters, Store, Subscription};
use crate::web_app::api::{ListQuery, ProductsApi, DEFAULT_PAGE_SIZE};
use crate::web_app::hooks::Notifier;
use crate::web_app::model::Product;

/// Number of products shown in the home page "featured" strip
pub const FEATURED_LIMIT: u32 = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub featured: Vec<Product>,
    pub current_product: Option<Product>,
    pub filters: ListFilters,
    /// Catalog list request
    pub loading: bool,
    pub error: Option<String>,
    pub featured_loading: bool,
    pub featured_error: Option<String>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    /// The last `fetch_product` hit an unknown slug
    pub not_found: bool,
}

/// Catalog store: product list with filters, featured strip, detail view
#[derive(Clone)]
pub struct ProductsStore<A> {
    api: A,
    store: Store<ProductsState>,
    page_size: u32,
    notifier: Option<Arc<dyn Notifier>>,
}

impl<A: ProductsApi> ProductsStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Store::default(),
            page_size: DEFAULT_PAGE_SIZE,
            notifier: None,
        }
    }

    /// Toast featured-strip failures; list and detail errors render inline
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn state(&self) -> ProductsState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Store<ProductsState> {
        &self.store
    }

    pub fn subscribe(&self, listener: impl Fn(&ProductsState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Fetch the product list for the current filters, replacing it
    ///
    /// On failure the previous list stays and `error` is set. A response
    /// that arrives after a newer request was started is dropped.
    pub async fn fetch_products(&self) {
        let query = self.store.with(|s| s.filters.query(self.page_size));
        self.load(query).await;
    }

    pub async fn set_category(&self, category: Option<String>) {
        self.store.update(|s| s.filters.select_category(category));
        self.fetch_products().await;
    }

    pub async fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.store.update(|s| s.filters.search(query));
        self.fetch_products().await;
    }

    pub async fn set_page(&self, page: u32) {
        self.store.update(|s| s.filters.go_to_page(page));
        self.fetch_products().await;
    }

    pub async fn clear_filters(&self) {
        self.store.update(|s| s.filters.clear());
        self.fetch_products().await;
    }

    pub async fn fetch_featured_products(&self) {
        let query = ListQuery {
            limit: FEATURED_LIMIT,
            featured: Some(true),
            ..ListQuery::default()
        };
        self.store.update(|s| {
            s.featured_loading = true;
            s.featured_error = None;
        });

        match self.api.list_products(&query).await {
            Ok(payload) => {
                tracing::info!("Loaded {} featured products", payload.items.len());
                self.store.update(|s| {
                    s.featured_loading = false;
                    s.featured = payload.items;
                });
            }
            Err(e) => {
                tracing::error!("Failed to load featured products: {}", e);
                self.store.update(|s| {
                    s.featured_loading = false;
                    s.featured_error = Some(e.to_string());
                });
                if let Some(notifier) = &self.notifier {
                    notifier.error(&format!("Could not load featured products: {}", e));
                }
            }
        }
    }

    /// Load one product for the detail page
    pub async fn fetch_product(&self, slug: &str) {
        self.store.update(|s| {
            s.detail_loading = true;
            s.detail_error = None;
            s.not_found = false;
            if s.current_product.as_ref().is_some_and(|p| p.slug != slug) {
                s.current_product = None;
            }
        });

        let result = self.api.get_product(slug).await;
        self.store.update(|s| {
            s.detail_loading = false;
            match result {
                Ok(product) => s.current_product = Some(product),
                Err(e) => {
                    tracing::error!("Failed to load product '{}': {}", slug, e);
                    s.not_found = e.is_not_found();
                    s.detail_error = Some(e.to_string());
                }
            }
        });
    }

    /// Count a product page view; failures are only logged
    pub async fn record_view(&self, slug: &str) {
        if let Err(e) = self.api.record_product_view(slug).await {
            tracing::warn!("Failed to record view for product '{}': {}", slug, e);
        }
    }

    async fn load(&self, query: ListQuery) {
        let generation = self.store.begin_request();
        self.store.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.list_products(&query).await;
        if !self.store.is_current(generation) {
            tracing::debug!("Dropping stale product list response for {:?}", query);
            return;
        }

        self.store.update(|s| {
            s.loading = false;
            match result {
                Ok(payload) => {
                    tracing::info!(
                        "Loaded {} products (page {} of {})",
                        payload.items.len(),
                        payload.pagination.current_page,
                        payload.pagination.total_pages
                    );
                    s.products = payload.items;
                    s.filters.pagination = payload.pagination;
                }
                Err(e) => {
                    tracing::error!("Failed to load products: {}", e);
                    s.error = Some(e.to_string());
                }
            }
        });
    }
}

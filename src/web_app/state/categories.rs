use std::sync::Arc;

use super::{Store, Subscription};
use crate::web_app::api::CategoriesApi;
use crate::web_app::error::ApiResult;
use crate::web_app::hooks::Notifier;
use crate::web_app::model::{active_sorted, Category};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoriesState {
    pub product_categories: Vec<Category>,
    pub blog_categories: Vec<Category>,
    pub gallery_categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Product,
    Blog,
    Gallery,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Product => "product",
            Kind::Blog => "blog",
            Kind::Gallery => "gallery",
        }
    }

    fn slot(self, state: &mut CategoriesState) -> &mut Vec<Category> {
        match self {
            Kind::Product => &mut state.product_categories,
            Kind::Blog => &mut state.blog_categories,
            Kind::Gallery => &mut state.gallery_categories,
        }
    }
}

/// Product, blog and gallery category lists (active only, display order)
#[derive(Clone)]
pub struct CategoriesStore<A> {
    api: A,
    store: Store<CategoriesState>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl<A: CategoriesApi> CategoriesStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Store::default(),
            notifier: None,
        }
    }

    /// Toast load failures; the filter selects otherwise just stay short
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn state(&self) -> CategoriesState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Store<CategoriesState> {
        &self.store
    }

    pub fn subscribe(&self, listener: impl Fn(&CategoriesState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    pub async fn fetch_product_categories(&self) {
        self.begin();
        let result = self.api.product_categories().await;
        self.finish(Kind::Product, result);
    }

    pub async fn fetch_blog_categories(&self) {
        self.begin();
        let result = self.api.blog_categories().await;
        self.finish(Kind::Blog, result);
    }

    pub async fn fetch_gallery_categories(&self) {
        self.begin();
        let result = self.api.gallery_categories().await;
        self.finish(Kind::Gallery, result);
    }

    fn begin(&self) {
        self.store.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn finish(&self, kind: Kind, result: ApiResult<Vec<Category>>) {
        if let Err(e) = &result {
            tracing::error!("Failed to load {} categories: {}", kind.label(), e);
            if let Some(notifier) = &self.notifier {
                notifier.error(&format!("Could not load {} categories: {}", kind.label(), e));
            }
        }

        self.store.update(|s| {
            s.loading = false;
            match result {
                Ok(categories) => *kind.slot(s) = active_sorted(categories),
                Err(e) => s.error = Some(e.to_string()),
            }
        });
    }
}

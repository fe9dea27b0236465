use std::sync::Arc;

use super::{ListFilters, Store, Subscription};
use crate::web_app::api::{BlogsApi, ListQuery, DEFAULT_PAGE_SIZE};
use crate::web_app::hooks::Notifier;
use crate::web_app::model::Blog;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogsState {
    pub blogs: Vec<Blog>,
    pub current_blog: Option<Blog>,
    pub filters: ListFilters,
    /// List request
    pub loading: bool,
    pub error: Option<String>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    pub not_found: bool,
    /// Slugs liked during this session, so the like button can disable itself
    pub liked: Vec<String>,
    /// Slugs with a like request in flight
    pub liking: Vec<String>,
}

impl BlogsState {
    pub fn has_liked(&self, slug: &str) -> bool {
        self.liked.iter().any(|s| s == slug)
    }

    pub fn is_liking(&self, slug: &str) -> bool {
        self.liking.iter().any(|s| s == slug)
    }

    /// Whether the like button for `slug` should accept a click
    pub fn can_like(&self, slug: &str) -> bool {
        !self.has_liked(slug) && !self.is_liking(slug)
    }
}

#[derive(Clone)]
pub struct BlogsStore<A> {
    api: A,
    store: Store<BlogsState>,
    page_size: u32,
    notifier: Option<Arc<dyn Notifier>>,
}

impl<A: BlogsApi> BlogsStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Store::default(),
            page_size: DEFAULT_PAGE_SIZE,
            notifier: None,
        }
    }

    /// Toast like failures; list and detail errors render inline
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn state(&self) -> BlogsState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Store<BlogsState> {
        &self.store
    }

    pub fn subscribe(&self, listener: impl Fn(&BlogsState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    pub async fn fetch_blogs(&self) {
        let query = self.store.with(|s| s.filters.query(self.page_size));
        self.load(query).await;
    }

    pub async fn set_category(&self, category: Option<String>) {
        self.store.update(|s| s.filters.select_category(category));
        self.fetch_blogs().await;
    }

    pub async fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.store.update(|s| s.filters.search(query));
        self.fetch_blogs().await;
    }

    pub async fn set_page(&self, page: u32) {
        self.store.update(|s| s.filters.go_to_page(page));
        self.fetch_blogs().await;
    }

    pub async fn clear_filters(&self) {
        self.store.update(|s| s.filters.clear());
        self.fetch_blogs().await;
    }

    pub async fn fetch_blog(&self, slug: &str) {
        self.store.update(|s| {
            s.detail_loading = true;
            s.detail_error = None;
            s.not_found = false;
            if s.current_blog.as_ref().is_some_and(|b| b.slug != slug) {
                s.current_blog = None;
            }
        });

        let result = self.api.get_blog(slug).await;
        self.store.update(|s| {
            s.detail_loading = false;
            match result {
                Ok(blog) => s.current_blog = Some(blog),
                Err(e) => {
                    tracing::error!("Failed to load blog post '{}': {}", slug, e);
                    s.not_found = e.is_not_found();
                    s.detail_error = Some(e.to_string());
                }
            }
        });
    }

    pub async fn record_view(&self, slug: &str) {
        if let Err(e) = self.api.record_blog_view(slug).await {
            tracing::warn!("Failed to record view for blog post '{}': {}", slug, e);
        }
    }

    /// Like a post once per session, updating the detail and list copies
    ///
    /// A second call while the first is in flight is ignored.
    pub async fn like_blog(&self, slug: &str) {
        let claimed = self.store.update(|s| {
            if !s.can_like(slug) {
                return false;
            }
            s.liking.push(slug.to_string());
            true
        });
        if !claimed {
            return;
        }

        let result = self.api.like_blog(slug).await;
        self.store.update(|s| {
            s.liking.retain(|pending| pending != slug);
            if let Ok(receipt) = &result {
                s.liked.push(slug.to_string());
                let bump = |blog: &mut Blog| {
                    blog.likes = receipt.likes.unwrap_or(blog.likes + 1);
                };
                if let Some(blog) = s.current_blog.as_mut().filter(|b| b.slug == slug) {
                    bump(blog);
                }
                for blog in s.blogs.iter_mut().filter(|b| b.slug == slug) {
                    bump(blog);
                }
            }
        });

        if let Err(e) = result {
            tracing::error!("Failed to like blog post '{}': {}", slug, e);
            if let Some(notifier) = &self.notifier {
                notifier.error(&format!("Could not record your like: {}", e));
            }
        }
    }

    async fn load(&self, query: ListQuery) {
        let generation = self.store.begin_request();
        self.store.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.list_blogs(&query).await;
        if !self.store.is_current(generation) {
            tracing::debug!("Dropping stale blog list response for {:?}", query);
            return;
        }

        self.store.update(|s| {
            s.loading = false;
            match result {
                Ok(payload) => {
                    tracing::info!("Loaded {} blog posts", payload.items.len());
                    s.blogs = payload.items;
                    s.filters.pagination = payload.pagination;
                }
                Err(e) => {
                    tracing::error!("Failed to load blog posts: {}", e);
                    s.error = Some(e.to_string());
                }
            }
        });
    }
}

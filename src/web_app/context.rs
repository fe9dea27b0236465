// web_app/context.rs - Application context and the store-to-signal bridge
//
// `AppContext` is provided once by `App` and holds the single instance of
// every store. Components read store state through `use_store`, which
// subscribes for the lifetime of the calling component.

use std::sync::Arc;

use leptos::prelude::*;

use crate::web_app::api::ApiClient;
use crate::web_app::config::StorefrontConfig;
use crate::web_app::error::ApiResult;
use crate::web_app::hooks::{Notifier, ToastQueue};
use crate::web_app::state::{BlogsStore, CategoriesStore, HeroStore, ProductsStore, Store};

#[derive(Clone)]
pub struct AppContext {
    pub config: StorefrontConfig,
    pub api: ApiClient,
    pub products: ProductsStore<ApiClient>,
    pub blogs: BlogsStore<ApiClient>,
    pub categories: CategoriesStore<ApiClient>,
    pub hero: HeroStore<ApiClient>,
    pub toasts: ToastQueue,
}

impl AppContext {
    pub fn new(config: StorefrontConfig) -> ApiResult<Self> {
        let api = ApiClient::from_config(&config)?;
        tracing::debug!("Storefront API at {}", api.base_url());
        let toasts = ToastQueue::new();
        let notifier: Arc<dyn Notifier> = Arc::new(toasts.clone());
        Ok(Self {
            products: ProductsStore::new(api.clone()).with_notifier(notifier.clone()),
            blogs: BlogsStore::new(api.clone()).with_notifier(notifier.clone()),
            categories: CategoriesStore::new(api.clone()).with_notifier(notifier),
            hero: HeroStore::new(api.clone()),
            toasts,
            config,
            api,
        })
    }

    /// Toast queue as the notifier handed to `use_api`
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(self.toasts.clone())
    }
}

/// The context provided by `App`; panics outside it, like `expect_context`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Mirror a store into a reactive signal until the owner is cleaned up
pub fn use_store<S>(store: &Store<S>) -> ReadSignal<S>
where
    S: Clone + Send + Sync + 'static,
{
    let (state, set_state) = signal(store.snapshot());
    let subscription = store.subscribe(move |next| {
        set_state.try_set(next.clone());
    });
    on_cleanup(move || drop(subscription));
    state
}

use super::{Store, Subscription};
use crate::web_app::api::HeroApi;
use crate::web_app::model::HeroSection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroState {
    pub slides: Vec<HeroSection>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Home page carousel slides
#[derive(Clone)]
pub struct HeroStore<A> {
    api: A,
    store: Store<HeroState>,
}

impl<A: HeroApi> HeroStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Store::default(),
        }
    }

    pub fn state(&self) -> HeroState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Store<HeroState> {
        &self.store
    }

    pub fn subscribe(&self, listener: impl Fn(&HeroState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Load the active slides in display order
    pub async fn fetch_hero_sections(&self) {
        self.store.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.hero_sections().await;
        self.store.update(|s| {
            s.loading = false;
            match result {
                Ok(mut slides) => {
                    slides.retain(|slide| slide.is_active);
                    slides.sort_by_key(|slide| slide.order);
                    s.slides = slides;
                }
                Err(e) => {
                    tracing::error!("Failed to load hero sections: {}", e);
                    s.error = Some(e.to_string());
                }
            }
        });
    }
}

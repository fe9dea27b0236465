use super::{ApiClient, HeroApi};
use crate::web_app::error::ApiResult;
use crate::web_app::model::HeroSection;

impl HeroApi for ApiClient {
    async fn hero_sections(&self) -> ApiResult<Vec<HeroSection>> {
        self.get(&["hero-sections"], &[], "Hero sections").await
    }
}

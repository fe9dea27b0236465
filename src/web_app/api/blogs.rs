use serde::{Deserialize, Serialize};

use super::{ApiClient, BlogsApi, ListQuery};
use crate::web_app::error::ApiResult;
use crate::web_app::model::{Blog, ListPayload};

/// `data` of `POST /blogs/:slug/like`
///
/// Older backends answer without a count; callers then bump locally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeReceipt {
    #[serde(default)]
    pub likes: Option<u64>,
}

impl BlogsApi for ApiClient {
    async fn list_blogs(&self, query: &ListQuery) -> ApiResult<ListPayload<Blog>> {
        self.get(&["blogs"], &query.to_pairs(), "Blogs").await
    }

    async fn get_blog(&self, slug: &str) -> ApiResult<Blog> {
        self.get(&["blogs", slug], &[], "Blog post").await
    }

    async fn record_blog_view(&self, slug: &str) -> ApiResult<()> {
        self.post_ack(&["blogs", slug, "view"], "Blog view").await
    }

    async fn like_blog(&self, slug: &str) -> ApiResult<LikeReceipt> {
        let envelope = self
            .post_json::<_, LikeReceipt>(&["blogs", slug, "like"], &serde_json::json!({}), "Blog like")
            .await?;
        if !envelope.success {
            return envelope.into_ack().map(|_| LikeReceipt::default());
        }
        Ok(envelope.data.unwrap_or_default())
    }
}

use super::ApiClient;
use crate::web_app::error::ApiResult;
use crate::web_app::model::ContactSubmission;

impl ApiClient {
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> ApiResult<()> {
        tracing::info!("Submitting contact form for {}", submission.email);
        self.post_json::<_, serde_json::Value>(&["contact"], submission, "Contact")
            .await?
            .into_ack()
    }
}

use super::ApiClient;
use crate::web_app::error::ApiResult;
use crate::web_app::model::CompanyDetails;

impl ApiClient {
    pub async fn get_company_details(&self) -> ApiResult<CompanyDetails> {
        self.get(&["company-details"], &[], "Company details").await
    }

    /// Replace the company details; needs the admin bearer token
    pub async fn update_company_details(&self, details: &CompanyDetails) -> ApiResult<CompanyDetails> {
        self.put_json(&["admin", "company-details"], details, "Company details")
            .await
    }
}

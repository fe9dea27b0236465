use super::{ApiClient, ListQuery, ProductsApi};
use crate::web_app::error::ApiResult;
use crate::web_app::model::{ListPayload, Product};

impl ProductsApi for ApiClient {
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ListPayload<Product>> {
        self.get(&["products"], &query.to_pairs(), "Products").await
    }

    async fn get_product(&self, slug: &str) -> ApiResult<Product> {
        self.get(&["products", slug], &[], "Product").await
    }

    async fn record_product_view(&self, slug: &str) -> ApiResult<()> {
        self.post_ack(&["products", slug, "view"], "Product view").await
    }
}

use serde::Deserialize;

use super::{ApiClient, CategoriesApi};
use crate::web_app::error::ApiResult;
use crate::web_app::model::{Category, ListPayload};

/// Category endpoints answer with either a bare array or a list payload
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryList {
    Plain(Vec<Category>),
    Paged(ListPayload<Category>),
}

impl From<CategoryList> for Vec<Category> {
    fn from(list: CategoryList) -> Self {
        match list {
            CategoryList::Plain(items) => items,
            CategoryList::Paged(payload) => payload.items,
        }
    }
}

impl ApiClient {
    async fn categories(&self, endpoint: &str, resource: &str) -> ApiResult<Vec<Category>> {
        let list: CategoryList = self.get(&[endpoint], &[], resource).await?;
        Ok(list.into())
    }
}

impl CategoriesApi for ApiClient {
    async fn product_categories(&self) -> ApiResult<Vec<Category>> {
        self.categories("product-categories", "Product categories").await
    }

    async fn blog_categories(&self) -> ApiResult<Vec<Category>> {
        self.categories("blog-categories", "Blog categories").await
    }

    async fn gallery_categories(&self) -> ApiResult<Vec<Category>> {
        self.categories("gallery-categories", "Gallery categories").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_and_paged_lists() {
        let plain: CategoryList = serde_json::from_value(json!([
            { "_id": "c1", "name": "Threads", "slug": "threads" }
        ]))
        .unwrap();
        let paged: CategoryList = serde_json::from_value(json!({
            "items": [{ "_id": "c1", "name": "Threads", "slug": "threads" }]
        }))
        .unwrap();

        let plain: Vec<Category> = plain.into();
        let paged: Vec<Category> = paged.into();
        assert_eq!(plain, paged);
    }
}

// web_app/model/mod.rs - Data models mirrored from the storefront REST API
//
// Every endpoint answers with the same envelope; list endpoints wrap their
// items in a `ListPayload` with pagination. Keys are camelCase on the wire
// and Mongo-style `_id` is accepted wherever an `id` is expected.

use serde::{Deserialize, Serialize};

use crate::web_app::error::{ApiError, ApiResult};

mod blog;
mod company;
mod product;

pub use blog::Blog;
pub use company::{
    BusinessHours, CompanyDetails, ContactSubmission, FooterContent, FooterLink, HeroSection,
    SocialLinks,
};
pub use product::Product;

/// `{ success, data, message }` wrapper returned by every endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success: false` into an error
    pub fn into_data(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "Request was not successful".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response envelope has no data".to_string()))
    }

    /// Check the envelope for success, ignoring any payload
    pub fn into_ack(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "Request was not successful".to_string()),
            ))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: 12,
        }
    }
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `data` of a list endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListPayload<T> {
    #[serde(alias = "products", alias = "blogs")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Product, blog and gallery categories all share this shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, alias = "displayOrder")]
    pub order: i32,
}

/// A category reference: either a bare id or the populated category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Embedded(Category),
    Id(String),
}

impl CategoryRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Embedded(c) => Some(&c.name),
            CategoryRef::Id(_) => None,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            CategoryRef::Embedded(c) => Some(&c.slug),
            CategoryRef::Id(_) => None,
        }
    }
}

/// Keep only active categories, in display order
pub fn active_sorted(mut categories: Vec<Category>) -> Vec<Category> {
    categories.retain(|c| c.is_active);
    categories.sort_by_key(|c| c.order);
    categories
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(name: &str, order: i32, active: bool) -> Category {
        Category {
            id: name.to_lowercase(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            is_active: active,
            order,
        }
    }

    #[test]
    fn test_envelope_success_unwraps_data() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_value(json!({ "success": true, "data": [1, 2, 3] })).unwrap();
        assert_eq!(envelope.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_failure_carries_server_message() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_value(json!({
            "success": false,
            "message": "Invalid category"
        }))
        .unwrap();
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.to_string(), "Invalid category");
    }

    #[test]
    fn test_envelope_without_data_is_decode_error() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_list_payload_accepts_aliases() {
        let payload: ListPayload<u32> = serde_json::from_value(json!({
            "products": [7, 8],
            "pagination": { "currentPage": 2, "totalPages": 3, "totalItems": 30, "itemsPerPage": 12 }
        }))
        .unwrap();
        assert_eq!(payload.items, vec![7, 8]);
        assert_eq!(payload.pagination.current_page, 2);
        assert!(payload.pagination.has_previous());
        assert!(payload.pagination.has_next());
    }

    #[test]
    fn test_category_ref_id_or_embedded() {
        let id: CategoryRef = serde_json::from_value(json!("64f0c0ffee")).unwrap();
        assert_eq!(id, CategoryRef::Id("64f0c0ffee".to_string()));
        assert_eq!(id.name(), None);

        let embedded: CategoryRef = serde_json::from_value(json!({
            "_id": "64f0c0ffee",
            "name": "Kashmiri Saffron",
            "slug": "kashmiri-saffron"
        }))
        .unwrap();
        assert_eq!(embedded.name(), Some("Kashmiri Saffron"));
        assert_eq!(embedded.slug(), Some("kashmiri-saffron"));
    }

    #[test]
    fn test_active_sorted() {
        let sorted = active_sorted(vec![
            category("Threads", 2, true),
            category("Hidden", 0, false),
            category("Powder", 1, true),
        ]);
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Powder", "Threads"]);
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{default_true, CategoryRef};

/// Catalog product (matches the `/products` payload)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form specification table; values are JSON scalars
    #[serde(default)]
    pub specifications: BTreeMap<String, serde_json::Value>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// First image, used for cards and social previews
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product is sold below its original price
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Short text for cards: the short description, else the description
    pub fn summary(&self) -> &str {
        self.short_description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_product() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "slug": "kashmiri-mongra-1g",
            "name": "Kashmiri Mongra Saffron 1g",
            "description": "Hand-picked stigmas",
            "price": 499,
            "originalPrice": 649.5,
            "category": { "_id": "c1", "name": "Saffron", "slug": "saffron" },
            "images": ["/img/mongra-1.jpg", "/img/mongra-2.jpg"],
            "specifications": { "net_weight": "1 g", "crocin_level": 250 },
            "inStock": true,
            "isFeatured": true,
            "rating": 4.8,
            "createdAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.price, Decimal::new(499, 0));
        assert_eq!(product.original_price, Some(Decimal::new(6495, 1)));
        assert!(product.is_discounted());
        assert!(product.is_published);
        assert_eq!(product.primary_image(), Some("/img/mongra-1.jpg"));
        assert_eq!(product.specifications.len(), 2);
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_not_discounted_when_original_is_lower_or_missing() {
        let mut product: Product = serde_json::from_value(json!({
            "id": "p2", "slug": "s", "name": "n", "price": 100
        }))
        .unwrap();
        assert!(!product.is_discounted());

        product.original_price = Some(Decimal::new(100, 0));
        assert!(!product.is_discounted());

        product.original_price = Some(Decimal::new(90, 0));
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_summary_prefers_short_description() {
        let mut product: Product = serde_json::from_value(json!({
            "id": "p3", "slug": "s", "name": "n", "price": 1,
            "description": "Long description"
        }))
        .unwrap();
        assert_eq!(product.summary(), "Long description");

        product.short_description = Some("Short".to_string());
        assert_eq!(product.summary(), "Short");

        product.short_description = Some("  ".to_string());
        assert_eq!(product.summary(), "Long description");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CategoryRef;

/// Blog post (matches the `/blogs` payload); `content` is an HTML string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(alias = "_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    /// Minutes, when the backend computed it
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Blog {
    /// Date shown on cards: publication date, else creation date
    pub fn display_date(&self) -> Option<DateTime<Utc>> {
        self.published_at.or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_blog() {
        let blog: Blog = serde_json::from_value(json!({
            "_id": "b1",
            "slug": "how-to-spot-fake-saffron",
            "title": "How to spot fake saffron",
            "excerpt": "Three quick tests",
            "content": "<p>Drop a thread in warm water...</p>",
            "category": "c9",
            "isPublished": true,
            "likes": 12,
            "createdAt": "2024-01-05T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(blog.id, "b1");
        assert!(blog.is_published);
        assert_eq!(blog.likes, 12);
        assert_eq!(blog.views, 0);
        assert_eq!(blog.category, Some(CategoryRef::Id("c9".to_string())));
        assert_eq!(blog.display_date(), blog.created_at);
    }
}

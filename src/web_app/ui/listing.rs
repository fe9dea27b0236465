// ui/listing.rs - View models for the product price block and blog index

use super::format::{discount_percent, format_price};
use crate::web_app::model::{Blog, Product};

/// Price block for cards and the product page
///
/// `original` and `discount_percent` are only set when the product is
/// actually discounted; the component renders `original` struck through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceView {
    pub price: String,
    pub original: Option<String>,
    pub discount_percent: Option<u32>,
}

impl PriceView {
    pub fn for_product(product: &Product) -> Self {
        let original = product.original_price.filter(|_| product.is_discounted());
        Self {
            price: format_price(product.price),
            original: original.map(format_price),
            discount_percent: original.and_then(|o| discount_percent(product.price, o)),
        }
    }
}

/// Blog index layout: the newest published post is featured
#[derive(Clone, Debug, PartialEq)]
pub enum BlogListing {
    Empty,
    Featured { featured: Blog, rest: Vec<Blog> },
}

impl BlogListing {
    pub fn from_posts(posts: impl IntoIterator<Item = Blog>) -> Self {
        let mut published = posts.into_iter().filter(|b| b.is_published);
        match published.next() {
            None => BlogListing::Empty,
            Some(featured) => BlogListing::Featured {
                featured,
                rest: published.collect(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BlogListing::Empty)
    }
}

// ui/links.rs - Outbound links: WhatsApp chats and social share intents

use reqwest::Url;

/// `https://wa.me/<digits>?text=<message>`
///
/// Non-digit characters are dropped from the number so "+91 99999 99999"
/// and "919999999999" produce the same link.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let mut url = match Url::parse(&format!("https://wa.me/{}", digits)) {
        Ok(url) => url,
        Err(_) => return format!("https://wa.me/{}", digits),
    };
    if !message.trim().is_empty() {
        url.query_pairs_mut().append_pair("text", message);
    }
    url.to_string()
}

/// Message prefilled by the product page "Order on WhatsApp" button
pub fn product_enquiry(product_name: &str, product_url: &str) -> String {
    format!("Hello, I'm interested in {}. {}", product_name, product_url)
        .trim_end()
        .to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::Facebook, ShareTarget::Twitter, ShareTarget::LinkedIn];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::LinkedIn => "LinkedIn",
        }
    }

    pub fn share_url(self, page_url: &str, title: &str) -> String {
        let (base, params): (&str, Vec<(&str, &str)>) = match self {
            ShareTarget::Facebook => ("https://www.facebook.com/sharer/sharer.php", vec![("u", page_url)]),
            ShareTarget::Twitter => ("https://twitter.com/intent/tweet", vec![("url", page_url), ("text", title)]),
            ShareTarget::LinkedIn => ("https://www.linkedin.com/sharing/share-offsite/", vec![("url", page_url)]),
        };
        match Url::parse_with_params(base, params) {
            Ok(url) => url.to_string(),
            Err(_) => base.to_string(),
        }
    }
}

/// Absolute page URL under the public site root
pub fn absolute_url(site_url: &str, path: &str) -> String {
    format!("{}/{}", site_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("+91 99999-99999", "Hi, 5g Mongra & more?");
        assert_eq!(link, "https://wa.me/919999999999?text=Hi%2C+5g+Mongra+%26+more%3F");
    }

    #[test]
    fn test_whatsapp_link_without_message() {
        assert_eq!(whatsapp_link("919999999999", "  "), "https://wa.me/919999999999");
    }

    #[test]
    fn test_product_enquiry() {
        assert_eq!(
            product_enquiry("Mongra Saffron", "http://localhost:3000/products/mongra"),
            "Hello, I'm interested in Mongra Saffron. http://localhost:3000/products/mongra"
        );
    }

    #[test]
    fn test_share_urls() {
        let page = "https://saffron.example/blog/grading guide";
        assert_eq!(
            ShareTarget::Facebook.share_url(page, "Guide"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fsaffron.example%2Fblog%2Fgrading+guide"
        );
        let tweet = ShareTarget::Twitter.share_url(page, "Saffron grades");
        assert!(tweet.starts_with("https://twitter.com/intent/tweet?url="));
        assert!(tweet.ends_with("&text=Saffron+grades"));
        assert!(ShareTarget::LinkedIn
            .share_url(page, "")
            .starts_with("https://www.linkedin.com/sharing/share-offsite/?url=https%3A"));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("http://localhost:3000/", "/blog/x"), "http://localhost:3000/blog/x");
        assert_eq!(absolute_url("http://localhost:3000", "products"), "http://localhost:3000/products");
    }
}

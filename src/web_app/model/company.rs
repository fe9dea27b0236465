use serde::{Deserialize, Serialize};

use super::default_true;

/// Singleton record behind `/company-details`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub map_embed_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub business_hours: Vec<BusinessHours>,
    #[serde(default)]
    pub footer: FooterContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

impl SocialLinks {
    /// (network label, url) pairs for every configured network
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook),
            ("Instagram", &self.instagram),
            ("Twitter", &self.twitter),
            ("LinkedIn", &self.linkedin),
            ("YouTube", &self.youtube),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub day: String,
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
    #[serde(default)]
    pub is_closed: bool,
}

impl BusinessHours {
    pub fn display(&self) -> String {
        if self.is_closed {
            "Closed".to_string()
        } else {
            format!("{} - {}", self.open, self.close)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub quick_links: Vec<FooterLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// One slide of the home page carousel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_link: Option<String>,
    #[serde(default)]
    pub secondary_cta_text: Option<String>,
    #[serde(default)]
    pub secondary_cta_link: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body of `POST /contact`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_interest: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_details_with_nested_footer() {
        let details: CompanyDetails = serde_json::from_value(json!({
            "companyName": "Kesar House",
            "email": "hello@kesar.example",
            "phone": "+91 98765 43210",
            "address": "Pampore, Kashmir",
            "socialLinks": { "instagram": "https://instagram.com/kesar", "facebook": "" },
            "businessHours": [
                { "day": "Monday", "open": "09:00", "close": "18:00" },
                { "day": "Sunday", "isClosed": true }
            ],
            "footer": {
                "about": "Pure saffron since 1952",
                "quickLinks": [{ "label": "Shop", "href": "/products" }]
            }
        }))
        .unwrap();

        assert_eq!(details.company_name, "Kesar House");
        assert_eq!(details.social_links.entries(), vec![("Instagram", "https://instagram.com/kesar")]);
        assert_eq!(details.business_hours[0].display(), "09:00 - 18:00");
        assert_eq!(details.business_hours[1].display(), "Closed");
        assert_eq!(details.footer.quick_links.len(), 1);
    }

    #[test]
    fn test_contact_submission_skips_empty_optionals() {
        let submission = ContactSubmission {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            subject: "Bulk order".to_string(),
            message: "Need 1kg".to_string(),
            product_interest: Some("Mongra".to_string()),
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert!(value.get("phone").is_none());
        assert_eq!(value["productInterest"], "Mongra");
    }
}

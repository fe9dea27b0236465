// web_app/config.rs - Storefront configuration
//
// On the server the values come from the process environment (after loading
// `.env`). The WASM bundle has no process environment, so the same variable
// names are captured at build time instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919999999999";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_BASE_URL is not a valid absolute URL: {0}")]
    InvalidApiUrl(String),
    #[error("WHATSAPP_NUMBER must contain at least one digit")]
    InvalidWhatsAppNumber,
}

/// Runtime configuration shared by the API client and the pages
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the storefront REST API, e.g. `https://api.example.com/api`
    pub api_base_url: String,
    /// Default WhatsApp number used for order and inquiry deep links
    pub whatsapp_number: String,
    /// Public URL of this site, used to build share links
    pub site_url: String,
    /// Bearer token for the admin endpoints (server-side only)
    #[serde(skip)]
    pub admin_token: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            admin_token: None,
        }
    }
}

impl StorefrontConfig {
    /// Build a configuration from a variable lookup, falling back to defaults
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let defaults = Self::default();
        let config = Self {
            api_base_url: get("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            whatsapp_number: get("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            site_url: get("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
            admin_token: get("ADMIN_API_TOKEN"),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration for the current target
    pub fn load() -> Result<Self, ConfigError> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "ssr")] {
                dotenv::dotenv().ok();
                Self::from_lookup(|key| std::env::var(key).ok())
            } else {
                Self::from_lookup(|key| {
                    match key {
                        "API_BASE_URL" => option_env!("API_BASE_URL"),
                        "WHATSAPP_NUMBER" => option_env!("WHATSAPP_NUMBER"),
                        "SITE_URL" => option_env!("SITE_URL"),
                        _ => None,
                    }
                    .map(str::to_string)
                })
            }
        }
    }

    /// Load the configuration, logging and falling back to defaults when invalid
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Invalid storefront configuration, using defaults: {}", e);
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.api_base_url)
            .map_err(|_| ConfigError::InvalidApiUrl(self.api_base_url.clone()))?;
        if !self.whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsAppNumber);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn test_values_from_environment() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("API_BASE_URL", "https://api.saffron.example/api/"),
            ("WHATSAPP_NUMBER", "+91 98765 43210"),
            ("ADMIN_API_TOKEN", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.saffron.example/api");
        assert_eq!(config.whatsapp_number, "+91 98765 43210");
        assert_eq!(config.admin_token.as_deref(), Some("secret"));
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = StorefrontConfig::from_lookup(lookup(&[("API_BASE_URL", "   ")])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[("API_BASE_URL", "not a url")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidApiUrl("not a url".to_string()));
    }

    #[test]
    fn test_whatsapp_number_needs_digits() {
        let err = StorefrontConfig::from_lookup(lookup(&[("WHATSAPP_NUMBER", "call us")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWhatsAppNumber);
    }
}

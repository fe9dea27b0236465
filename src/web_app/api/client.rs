use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::web_app::config::StorefrontConfig;
use crate::web_app::error::{ApiError, ApiResult};
use crate::web_app::model::ApiEnvelope;

/// HTTP client for the storefront REST API
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            http: Client::new(),
            bearer_token: None,
        })
    }

    pub fn from_config(config: &StorefrontConfig) -> ApiResult<Self> {
        let client = Self::new(&config.api_base_url)?;
        Ok(match &config.admin_token {
            Some(token) => client.with_bearer_token(token.clone()),
            None => client,
        })
    }

    /// Attach a bearer token, sent with admin requests
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint; each segment is percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
        resource: &str,
    ) -> ApiResult<T> {
        let request = self.request(Method::GET, segments)?.query(query);
        self.send::<T>(request, resource).await?.into_data()
    }

    pub(crate) async fn post_ack(&self, segments: &[&str], resource: &str) -> ApiResult<()> {
        let request = self.request(Method::POST, segments)?;
        self.send::<serde_json::Value>(request, resource).await?.into_ack()
    }

    pub(crate) async fn post_json<B, T>(&self, segments: &[&str], body: &B, resource: &str) -> ApiResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments)?.json(body);
        self.send(request, resource).await
    }

    pub(crate) async fn put_json<B, T>(&self, segments: &[&str], body: &B, resource: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(Method::PUT, segments)?.json(body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        self.send::<T>(request, resource).await?.into_data()
    }

    fn request(&self, method: Method, segments: &[&str]) -> ApiResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, resource: &str) -> ApiResult<ApiEnvelope<T>> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request for {} failed: {}", resource, e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body, resource).inspect_err(|e| {
            tracing::warn!("{} request returned {}: {}", resource, status, e);
        })
    }
}

/// Turn a status code and body into an envelope or an `ApiError`
///
/// Error responses use the server's `message` when the body is an envelope,
/// falling back to the status reason.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str, resource: &str) -> ApiResult<ApiEnvelope<T>> {
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resource.to_string()));
    }
    if !status.is_success() {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "Request failed with status {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
                .trim_end()
                .to_string()
            });
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::{ListPayload, Product};

    #[test]
    fn test_endpoint_appends_segments() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        let url = client.endpoint(&["products", "kashmiri-mongra", "view"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products/kashmiri-mongra/view");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let client = ApiClient::new("https://api.example.com/v1/").unwrap();
        let url = client.endpoint(&["blog-categories"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/blog-categories");
    }

    #[test]
    fn test_endpoint_encodes_slug() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        let url = client.endpoint(&["blogs", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/blogs/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ApiClient::new("localhost:5000"), Err(ApiError::InvalidUrl(_))));
        assert!(matches!(ApiClient::new("nope"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_decode_list_response() {
        let body = r#"{
            "success": true,
            "data": {
                "items": [{ "_id": "p1", "slug": "mongra", "name": "Mongra", "price": 499 }],
                "pagination": { "currentPage": 1, "totalPages": 1, "totalItems": 1, "itemsPerPage": 12 }
            }
        }"#;
        let payload: ListPayload<Product> = decode_response(StatusCode::OK, body, "Products")
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.pagination.total_items, 1);
    }

    #[test]
    fn test_decode_not_found() {
        let err = decode_response::<Product>(StatusCode::NOT_FOUND, "", "Product").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_decode_server_error_message() {
        let body = r#"{ "success": false, "message": "Validation failed: email" }"#;
        let err = decode_response::<serde_json::Value>(StatusCode::BAD_REQUEST, body, "Contact").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: email");
    }

    #[test]
    fn test_decode_server_error_without_body() {
        let err = decode_response::<serde_json::Value>(StatusCode::BAD_GATEWAY, "<html>", "Blogs").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502 Bad Gateway");
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_response::<Product>(StatusCode::OK, "not json", "Product").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}

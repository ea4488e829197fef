//! Client for the optional catalog/contact backend.
//!
//! # Endpoints
//!
//! ```text
//! GET  {base}/api/products       - Product[] or { items: Product[] }
//! GET  {base}/api/lookbook       - LookbookEntry[] or { items: [...] }
//! GET  {base}/api/testimonials   - Testimonial[] or { items: [...] }
//! POST {base}/api/contact        - { name, email, message }; only the status matters
//! ```
//!
//! Without a base URL every call short-circuits with [`BackendError::Disabled`]
//! and no request leaves the process.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use ressurreccion_core::ContactPayload;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No backend URL is configured.
    #[error("backend disabled")]
    Disabled,

    /// Transport failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// Body was not valid JSON, or items did not decode.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body was JSON but neither an array nor `{ items: [...] }`.
    #[error("unexpected shape: {0}")]
    Shape(&'static str),
}

/// A backend endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Products,
    Lookbook,
    Testimonials,
    Contact,
}

impl Endpoint {
    /// Path appended to the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Products => "/api/products",
            Self::Lookbook => "/api/lookbook",
            Self::Testimonials => "/api/testimonials",
            Self::Contact => "/api/contact",
        }
    }

    /// Short name used in log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Lookbook => "lookbook",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }
}

/// HTTP client bound to an optional backend base URL.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base: Option<String>,
}

impl BackendClient {
    /// Create a client; `None` disables every endpoint.
    #[must_use]
    pub fn new(base_url: Option<&Url>) -> Self {
        let base = base_url.map(|url| url.as_str().trim_end_matches('/').to_string());

        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base,
            }),
        }
    }

    /// A client with no backend configured.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Whether a backend URL is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.base.is_some()
    }

    /// Full URL for an endpoint, or `None` when disabled.
    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> Option<String> {
        self.inner
            .base
            .as_ref()
            .map(|base| format!("{base}{}", endpoint.path()))
    }

    /// The underlying HTTP client, shared with list loaders.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.client
    }

    /// POST a contact payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Disabled` without any network call when no
    /// backend is configured, `Http` on transport failure, and `Status` for
    /// any non-2xx answer. The response body is never read.
    pub async fn post_contact(&self, payload: &ContactPayload) -> Result<(), BackendError> {
        let url = self.url(Endpoint::Contact).ok_or(BackendError::Disabled)?;

        let response = self
            .inner
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        Ok(())
    }
}

/// GET a list endpoint and decode it.
///
/// # Errors
///
/// Returns `BackendError` for transport failures, non-2xx statuses, invalid
/// JSON, or an unexpected shape.
pub async fn fetch_list<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<T>, BackendError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status));
    }

    let body = response.bytes().await?;
    let value: Value = serde_json::from_slice(&body)?;
    decode_list(value)
}

/// Accept either a bare JSON array or an object whose `items` is an array.
///
/// # Errors
///
/// Returns `BackendError::Shape` for any other JSON value, and
/// `BackendError::Decode` if an element does not decode as `T`.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, BackendError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(BackendError::Shape("`items` is not an array")),
            None => return Err(BackendError::Shape("object without `items`")),
        },
        _ => return Err(BackendError::Shape("neither an array nor an object")),
    };

    Ok(serde_json::from_value(Value::Array(items))?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use ressurreccion_core::Testimonial;

    #[test]
    fn test_url_joins_without_double_slash() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        let client = BackendClient::new(Some(&base));
        assert_eq!(
            client.url(Endpoint::Products).as_deref(),
            Some("http://localhost:8000/api/products")
        );
    }

    #[test]
    fn test_url_keeps_path_prefix() {
        let base = Url::parse("https://example.com/shop/").unwrap();
        let client = BackendClient::new(Some(&base));
        assert_eq!(
            client.url(Endpoint::Contact).as_deref(),
            Some("https://example.com/shop/api/contact")
        );
    }

    #[test]
    fn test_disabled_client_has_no_urls() {
        let client = BackendClient::disabled();
        assert!(!client.is_enabled());
        assert!(client.url(Endpoint::Lookbook).is_none());
    }

    #[tokio::test]
    async fn test_post_contact_disabled_short_circuits() {
        let client = BackendClient::disabled();
        let result = client.post_contact(&ContactPayload::default()).await;
        assert!(matches!(result, Err(BackendError::Disabled)));
    }

    #[test]
    fn test_decode_bare_array() {
        let list: Vec<Testimonial> =
            decode_list(json!([{"name": "Raka", "quote": "Clean.", "rating": 5}])).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().map(|t| t.name.as_str()), Some("Raka"));
    }

    #[test]
    fn test_decode_items_wrapper() {
        let list: Vec<Testimonial> =
            decode_list(json!({"items": [{"name": "A"}, {"name": "B"}], "total": 2})).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        for value in [
            json!({"data": []}),
            json!({"items": {"name": "A"}}),
            json!("products"),
            json!(42),
            json!(null),
        ] {
            let result = decode_list::<Testimonial>(value);
            assert!(matches!(result, Err(BackendError::Shape(_))));
        }
    }

    #[test]
    fn test_decode_keeps_products_with_null_price() {
        let list: Vec<ressurreccion_core::Product> = decode_list(json!([
            {"title": "Live Tee", "price": 50},
            {"title": "Live Gift Card", "price": null}
        ]))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.last().map(|p| p.price), Some(ressurreccion_core::Price::ZERO));
    }

    #[test]
    fn test_decode_rejects_mistyped_elements() {
        let result = decode_list::<Testimonial>(json!([{"name": 7}]));
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }
}

//! Contact form submission.
//!
//! Forwards the visitor's message to `{base}/api/contact`. Transport
//! failures and non-2xx answers are indistinguishable to the visitor: both
//! end in [`ContactStatus::Failure`].

use tracing::instrument;

use ressurreccion_core::{ContactPayload, ContactStatus};

use crate::backend::{BackendClient, BackendError};

/// Submits contact payloads and maps the outcome to a status.
#[derive(Clone)]
pub struct ContactSubmitter {
    backend: BackendClient,
}

impl ContactSubmitter {
    #[must_use]
    pub const fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Run one submission through the state machine.
    ///
    /// Invalid input resolves to [`ContactStatus::Invalid`] and an absent
    /// backend to [`ContactStatus::Failure`], both without a network call.
    #[instrument(skip(self, payload), fields(backend = self.backend.is_enabled()))]
    pub async fn submit(&self, payload: &ContactPayload) -> ContactStatus {
        if let Err(e) = payload.validate() {
            tracing::info!(error = %e, "contact form rejected");
            return ContactStatus::Invalid;
        }

        let status = ContactStatus::Idle.submit();
        match self.backend.post_contact(payload).await {
            Ok(()) => {
                tracing::info!("contact message delivered");
                status.resolve(true)
            }
            Err(BackendError::Disabled) => {
                tracing::warn!("contact form submitted with no backend configured");
                status.resolve(false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message delivery failed");
                status.resolve(false)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use serde_json::Value;
    use url::Url;

    use super::*;

    type Received = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Raka".to_string(),
            email: "raka@example.com".to_string(),
            message: "Restock the cargo?".to_string(),
        }
    }

    /// Backend answering `/api/contact` with `status`, recording each request.
    async fn contact_backend(status: StatusCode) -> (Url, Received) {
        let received: Received = Arc::default();
        let log = Arc::clone(&received);
        let router = Router::new().route(
            "/api/contact",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let log = Arc::clone(&log);
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    log.lock().unwrap().push((content_type, body));
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (Url::parse(&format!("http://{addr}")).unwrap(), received)
    }

    #[tokio::test]
    async fn test_no_backend_fails_without_network() {
        let submitter = ContactSubmitter::new(BackendClient::disabled());
        assert_eq!(submitter.submit(&payload()).await, ContactStatus::Failure);
    }

    #[tokio::test]
    async fn test_created_is_success_and_posts_json() {
        let (base, received) = contact_backend(StatusCode::CREATED).await;
        let submitter = ContactSubmitter::new(BackendClient::new(Some(&base)));

        assert_eq!(submitter.submit(&payload()).await, ContactStatus::Success);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (content_type, body) = received.first().unwrap();
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, &serde_json::to_value(payload()).unwrap());
    }

    #[tokio::test]
    async fn test_server_error_is_failure() {
        let (base, received) = contact_backend(StatusCode::INTERNAL_SERVER_ERROR).await;
        let submitter = ContactSubmitter::new(BackendClient::new(Some(&base)));

        assert_eq!(submitter.submit(&payload()).await, ContactStatus::Failure);
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_backend() {
        let (base, received) = contact_backend(StatusCode::OK).await;
        let submitter = ContactSubmitter::new(BackendClient::new(Some(&base)));
        let blank = ContactPayload {
            message: "   ".to_string(),
            ..payload()
        };

        assert_eq!(submitter.submit(&blank).await, ContactStatus::Invalid);
        assert!(received.lock().unwrap().is_empty());
    }
}

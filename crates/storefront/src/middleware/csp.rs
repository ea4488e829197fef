//! Per-response nonce for the page's anchor-scroll script.
//!
//! The page ships exactly one inline script. Every response draws a fresh
//! nonce; the page template stamps it on `<script nonce="...">` and
//! [`super::security_headers`] allows it in `script-src`.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// Nonce bytes drawn per response.
const NONCE_BYTES: usize = 16;

/// Base64 nonce shared by the CSP header and the inline script tag.
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Draw a fresh nonce from the thread RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    /// The `script-src` source expression for this nonce.
    #[must_use]
    pub fn source(&self) -> String {
        format!("'nonce-{}'", self.0)
    }
}

/// Attach a fresh [`CspNonce`] to the request.
///
/// Sits outside `security_headers_middleware`, which reads the nonce back
/// from the request extensions.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Without a nonce the anchor script is blocked, but the page still works.
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!("no CSP nonce on request; anchor script will be blocked");
            Self(String::new())
        }))
    }
}

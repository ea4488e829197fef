//! Integration tests for the Ressurreccion storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ressurreccion-integration-tests
//! ```
//!
//! Each test starts its own storefront on an ephemeral port, optionally
//! backed by a [`FakeBackend`], and drives it over HTTP with a cookie-aware
//! client so the session (cart, flags, contact flash) persists between
//! requests.
//!
//! # Test Categories
//!
//! - `storefront_page` - Page rendering, fallback data, filters, navigation
//! - `storefront_cart` - Cart drawer, add/remove, totals
//! - `storefront_contact` - Contact form outcomes

#![allow(clippy::missing_panics_doc)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use reqwest::{Client, Response, redirect::Policy};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::watch;
use url::Url;

use ressurreccion_storefront::config::StorefrontConfig;
use ressurreccion_storefront::routes;
use ressurreccion_storefront::shell::{Shell, ShellGuard};
use ressurreccion_storefront::state::AppState;

/// Bind a router to `127.0.0.1:0` and serve it in the background.
pub async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    Url::parse(&format!("http://{addr}")).expect("server url")
}

// =============================================================================
// Fake Backend
// =============================================================================

/// Holds a backend answer until opened. A gate that is never opened makes
/// the endpoint hang.
#[derive(Clone)]
pub struct Gate {
    open: Arc<watch::Sender<bool>>,
}

impl Gate {
    #[must_use]
    pub fn closed() -> Self {
        Self {
            open: Arc::new(watch::Sender::new(false)),
        }
    }

    /// Release every held and future answer.
    pub fn open(&self) {
        self.open.send_replace(true);
    }

    async fn wait(&self) {
        let mut open = self.open.subscribe();
        let _ = open.wait_for(|open| *open).await;
    }
}

/// Canned answers for the backend endpoints.
#[derive(Clone)]
pub struct BackendScript {
    pub products: Value,
    pub lookbook: Value,
    pub testimonials: Value,
    pub contact_status: StatusCode,
    /// Hold `/api/products` answers until the gate opens.
    pub products_gate: Option<Gate>,
}

impl Default for BackendScript {
    fn default() -> Self {
        Self {
            products: Value::Array(Vec::new()),
            lookbook: Value::Array(Vec::new()),
            testimonials: Value::Array(Vec::new()),
            contact_status: StatusCode::CREATED,
            products_gate: None,
        }
    }
}

/// A backend on an ephemeral port that records what it receives.
pub struct FakeBackend {
    pub url: Url,
    contact_bodies: Arc<std::sync::Mutex<Vec<Value>>>,
    list_hits: Arc<AtomicUsize>,
}

impl FakeBackend {
    /// Start serving the scripted answers.
    pub async fn start(script: BackendScript) -> Self {
        let contact_bodies = Arc::new(std::sync::Mutex::new(Vec::new()));
        let list_hits = Arc::new(AtomicUsize::new(0));

        let list = |body: Value, hits: Arc<AtomicUsize>| {
            get(move || {
                hits.fetch_add(1, Ordering::SeqCst);
                let body = body.clone();
                async move { Json(body) }
            })
        };

        let gate = script.products_gate;
        let products = script.products;
        let product_hits = Arc::clone(&list_hits);
        let gated_products = get(move || {
            product_hits.fetch_add(1, Ordering::SeqCst);
            let body = products.clone();
            let gate = gate.clone();
            async move {
                if let Some(gate) = gate {
                    gate.wait().await;
                }
                Json(body)
            }
        });

        let bodies = Arc::clone(&contact_bodies);
        let status = script.contact_status;
        let router = Router::new()
            .route("/api/products", gated_products)
            .route("/api/lookbook", list(script.lookbook, Arc::clone(&list_hits)))
            .route(
                "/api/testimonials",
                list(script.testimonials, Arc::clone(&list_hits)),
            )
            .route(
                "/api/contact",
                post(move |Json(body): Json<Value>| {
                    let bodies = Arc::clone(&bodies);
                    async move {
                        bodies.lock().expect("contact log").push(body);
                        status
                    }
                }),
            );

        Self {
            url: serve(router).await,
            contact_bodies,
            list_hits,
        }
    }

    /// JSON bodies posted to `/api/contact`, in arrival order.
    pub fn contact_bodies(&self) -> Vec<Value> {
        self.contact_bodies.lock().expect("contact log").clone()
    }

    /// Number of list endpoint requests served.
    pub fn list_hits(&self) -> usize {
        self.list_hits.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// A running storefront plus a client holding one visitor's session.
pub struct TestContext {
    pub client: Client,
    pub base_url: Url,
    pub state: AppState,
    _shell: ShellGuard,
}

impl TestContext {
    /// Start a storefront against `backend` (or none) and wait for the
    /// first catalog load to settle.
    pub async fn start(backend: Option<&Url>) -> Self {
        let ctx = Self::start_loading(backend).await;
        ctx.state.catalog().settled().await;
        ctx
    }

    /// Start a storefront without waiting for the catalog; the page serves
    /// fallback data until the backend answers.
    pub async fn start_loading(backend: Option<&Url>) -> Self {
        let config = StorefrontConfig {
            backend_url: backend.cloned(),
            catalog_refresh: None,
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config);
        let shell = Shell::mount(Arc::clone(state.catalog()), None);

        let base_url = serve(routes::app(state.clone())).await;
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("http client");

        Self {
            client,
            base_url,
            state,
            _shell: shell,
        }
    }

    /// Absolute URL for a storefront path.
    pub fn url(&self, path: &str) -> String {
        self.base_url.join(path).expect("storefront path").to_string()
    }

    /// GET a path without following redirects.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request")
    }

    /// GET a path and return the body text.
    pub async fn page(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        response.text().await.expect("page body")
    }

    /// POST a form without following redirects.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request")
    }
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

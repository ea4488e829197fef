//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - The page (query: category)
//! GET  /shop                   - Product grid fragment (query: category)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (page can render)
//!
//! # Cart
//! POST /cart/add               - Add product by loaded-list index
//! POST /cart/remove            - Remove line by index
//! POST /cart/open              - Show the drawer
//! POST /cart/close             - Hide the drawer
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Shell
//! POST /menu/toggle            - Flip the mobile menu
//! GET  /nav/{section}          - Close menu, redirect to /#section
//!
//! # Contact
//! POST /contact                - Submit the contact form
//! ```

pub mod cart;
pub mod contact;
pub mod home;
pub mod nav;

use axum::{
    Router,
    extract::{Request, State},
    http::Uri,
    middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use ressurreccion_core::CategoryFilter;

use crate::error::AppError;
use crate::middleware::{
    create_session_layer, csp_nonce_middleware, request_id_middleware,
    security_headers_middleware,
};
use crate::state::AppState;

/// Directory served under `/static`.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Where to send the visitor after a form post.
///
/// Keeps the active shop filter; only known filter labels are echoed back
/// into the URL.
pub(crate) fn back_to_page(category: Option<&str>, fragment: Option<&str>) -> Redirect {
    let filter = CategoryFilter::from_query(category);
    let mut target = match filter {
        CategoryFilter::All => "/".to_string(),
        other => format!("/?category={}", other.label()),
    };
    if let Some(fragment) = fragment {
        target.push('#');
        target.push_str(fragment);
    }
    Redirect::to(&target)
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/count", get(cart::count))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/shop", get(home::shop))
        .nest("/cart", cart_routes())
        .route("/menu/toggle", post(nav::toggle_menu))
        .route("/nav/{section}", get(nav::section))
        .route("/contact", post(contact::submit))
}

/// Build the full application: routes, static files and middleware.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found)
        .layer(session_layer)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(csp_nonce_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Anything outside the page's routes.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Readiness health check endpoint.
///
/// The page always renders, with fallback data while a section is loading
/// or after its backend failed, so readiness never depends on the backend.
/// The body says whether every section has settled.
async fn readiness(State(state): State<AppState>) -> &'static str {
    if state.catalog().is_settled() {
        "ready"
    } else {
        "ready (catalog loading)"
    }
}

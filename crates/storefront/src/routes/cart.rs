//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every mutation is a plain form
//! post answered with `303 See Other` back to the page, so the drawer state
//! survives the reload.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::back_to_page;
use crate::error::{Result, add_breadcrumb};
use crate::models::session;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    /// Title of the product card the visitor clicked.
    pub title: String,
    /// Active shop filter, kept across the redirect.
    #[serde(default)]
    pub category: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    /// Index of the cart line.
    pub index: usize,
    #[serde(default)]
    pub category: Option<String>,
}

/// Drawer open/close form data.
#[derive(Debug, Default, Deserialize)]
pub struct DrawerForm {
    #[serde(default)]
    pub category: Option<String>,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Add a snapshot of the clicked product and open the drawer.
///
/// The product is found by title, so a catalog refresh between render and
/// click cannot swap in a different item. An unknown title leaves the cart
/// untouched.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    if let Some(product) = state.catalog().find_product(&form.title) {
        let mut cart = session::load_cart(&session).await?;
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("title", product.title.as_str())][..]),
        );
        cart.add(product);
        session::save_cart(&session, &cart).await?;
        tracing::debug!(count = cart.count(), "cart line added");
    } else {
        tracing::debug!(title = %form.title, "add ignored: unknown product");
    }

    Ok(back_to_page(form.category.as_deref(), Some("shop")))
}

/// Remove one line by index; out of range is a no-op.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;
    if cart.remove(form.index).is_some() {
        session::save_cart(&session, &cart).await?;
    }
    Ok(back_to_page(form.category.as_deref(), None))
}

/// Show the drawer.
#[instrument(skip(session))]
pub async fn open(session: Session, Form(form): Form<DrawerForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;
    cart.open_drawer();
    session::save_cart(&session, &cart).await?;
    Ok(back_to_page(form.category.as_deref(), None))
}

/// Hide the drawer.
#[instrument(skip(session))]
pub async fn close(session: Session, Form(form): Form<DrawerForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;
    cart.close_drawer();
    session::save_cart(&session, &cart).await?;
    Ok(back_to_page(form.category.as_deref(), None))
}

/// Cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = session::load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.count(),
    })
}

//! Home page route handler.
//!
//! The whole storefront is one page. Every section renders from whatever
//! the catalog holds at request time, so a slow or absent backend shows the
//! fallback datasets rather than an empty page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ressurreccion_core::shell::nav_links;
use ressurreccion_core::{
    Cart, CategoryFilter, ContactPayload, ContactStatus, LookbookEntry, NavLink, Product,
    Testimonial, UiFlags,
};

use crate::error::Result;
use crate::filters;
use crate::middleware::CspNonce;
use crate::models::ContactFlash;
use crate::models::session;
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Product card display data.
#[derive(Clone)]
pub struct ProductView {
    /// Posted back by the add-to-cart form.
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
    pub featured: bool,
}

impl ProductView {
    fn new(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.primary_image().map(String::from),
            featured: product.is_featured(),
        }
    }
}

/// A category filter button.
#[derive(Clone)]
pub struct FilterView {
    pub label: &'static str,
    pub active: bool,
}

/// The shop section: filter bar plus filtered grid.
#[derive(Clone)]
pub struct ShopView {
    pub filters: Vec<FilterView>,
    pub products: Vec<ProductView>,
    /// Label of the active filter, posted back so redirects keep it.
    pub category: &'static str,
    /// A fetch is still outstanding; the grid shows fallback data.
    pub loading: bool,
}

impl ShopView {
    /// Filter the loaded list.
    #[must_use]
    pub fn new(products: &[Product], filter: CategoryFilter, loading: bool) -> Self {
        Self {
            filters: CategoryFilter::ALL
                .into_iter()
                .map(|f| FilterView {
                    label: f.label(),
                    active: f == filter,
                })
                .collect(),
            products: filter
                .apply(products)
                .map(ProductView::new)
                .collect(),
            category: filter.label(),
            loading,
        }
    }
}

/// A line in the cart drawer.
#[derive(Clone)]
pub struct CartLineView {
    pub index: usize,
    pub title: String,
    pub price: String,
    pub image: Option<String>,
}

/// Cart drawer display data.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub count: usize,
    pub total: String,
    pub open: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .enumerate()
                .map(|(index, line)| CartLineView {
                    index,
                    title: line.product().title.clone(),
                    price: line.price().to_string(),
                    image: line.product().primary_image().map(String::from),
                })
                .collect(),
            count: cart.count(),
            total: cart.total_display(),
            open: cart.is_drawer_open(),
        }
    }
}

/// Contact form display data.
#[derive(Clone, Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status_message: Option<&'static str>,
    pub success: bool,
}

impl From<ContactFlash> for ContactFormView {
    fn from(flash: ContactFlash) -> Self {
        let ContactPayload {
            name,
            email,
            message,
        } = flash.form;
        Self {
            name,
            email,
            message,
            status_message: flash.status.message(),
            success: flash.status == ContactStatus::Success,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nonce: String,
    pub nav: Vec<NavLink>,
    pub flags: UiFlags,
    pub shop: ShopView,
    pub lookbook: Vec<LookbookEntry>,
    pub testimonials: Vec<Testimonial>,
    pub cart: CartView,
    pub contact: ContactFormView,
}

/// Product grid fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub shop: ShopView,
}

/// Query parameters accepted by the page and the grid fragment.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
}

impl ShopQuery {
    fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_query(self.category.as_deref())
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the page.
#[instrument(skip(state, session, nonce))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Query(query): Query<ShopQuery>,
) -> Result<HomeTemplate> {
    let cart = session::load_cart(&session).await?;
    let flags = session::load_flags(&session).await?;
    let contact = session::take_contact_flash(&session)
        .await?
        .map(ContactFormView::from)
        .unwrap_or_default();

    let catalog = state.catalog();
    let products = catalog.products();

    Ok(HomeTemplate {
        nonce,
        nav: nav_links(),
        flags,
        shop: ShopView::new(&products.data, query.filter(), products.loading),
        lookbook: catalog.lookbook(),
        testimonials: catalog.testimonials(),
        cart: CartView::from(&cart),
        contact,
    })
}

/// Render only the product grid for a category.
///
/// A pure filter over the loaded list; never triggers a backend call.
#[instrument(skip(state))]
pub async fn shop(State(state): State<AppState>, Query(query): Query<ShopQuery>) -> ProductGridTemplate {
    let products = state.catalog().products();
    ProductGridTemplate {
        shop: ShopView::new(&products.data, query.filter(), products.loading),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ressurreccion_core::samples;

    use super::*;

    #[test]
    fn test_shop_view_filters_by_category() {
        let products = samples::products();
        let view = ShopView::new(&products, CategoryFilter::Pants, false);

        assert_eq!(view.products.len(), 1);
        let card = view.products.first().unwrap();
        assert_eq!(card.category, "Pants");
        assert_eq!(view.category, "Pants");
        assert_eq!(view.filters.iter().filter(|f| f.active).count(), 1);
    }

    #[test]
    fn test_shop_view_all_shows_everything() {
        let products = samples::products();
        let view = ShopView::new(&products, CategoryFilter::All, true);
        assert_eq!(view.products.len(), products.len());
        assert!(view.loading);
    }

    #[test]
    fn test_cart_view_formats_total() {
        let mut cart = Cart::new();
        for product in samples::products().into_iter().take(2) {
            cart.add(product);
        }
        let view = CartView::from(&cart);
        assert_eq!(view.count, 2);
        assert_eq!(view.total, cart.total_display());
        assert_eq!(view.lines.last().unwrap().index, 1);
        assert!(view.open);
    }

    #[test]
    fn test_prices_display_as_given_and_total_fixed() {
        let tee = samples::products().into_iter().next().unwrap();
        let shop = ShopView::new(std::slice::from_ref(&tee), CategoryFilter::All, false);
        assert_eq!(shop.products.first().unwrap().price, "45");

        let mut cart = Cart::new();
        cart.add(tee);
        let view = CartView::from(&cart);
        assert_eq!(view.lines.first().unwrap().price, "45");
        assert_eq!(view.total, "45.00");
    }

    #[test]
    fn test_contact_view_from_failure_keeps_fields() {
        let flash = ContactFlash::new(
            ContactStatus::Failure,
            ContactPayload {
                name: "Raka".to_string(),
                email: "raka@example.com".to_string(),
                message: "Hi".to_string(),
            },
        );
        let view = ContactFormView::from(flash);
        assert_eq!(view.name, "Raka");
        assert!(!view.success);
        assert_eq!(
            view.status_message,
            Some(ressurreccion_core::contact::FAILURE_MESSAGE)
        );
    }
}

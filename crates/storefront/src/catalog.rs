//! The three backend-fed page sections.
//!
//! Each section pairs one list endpoint with its fallback dataset. The
//! catalog is shared by every request; what a visitor sees is whatever
//! the loaders hold at render time (fallback data while loading).

use ressurreccion_core::{LookbookEntry, Product, Testimonial, samples};

use crate::backend::{BackendClient, Endpoint};
use crate::loader::{ListState, RemoteList};

/// Loaders for products, lookbook and testimonials.
pub struct Catalog {
    backend: BackendClient,
    products: RemoteList<Product>,
    lookbook: RemoteList<LookbookEntry>,
    testimonials: RemoteList<Testimonial>,
}

impl Catalog {
    /// Create loaders holding the sample datasets. Nothing is fetched until
    /// [`Catalog::load_all`].
    #[must_use]
    pub fn new(backend: BackendClient) -> Self {
        let http = backend.http().clone();
        Self {
            products: RemoteList::new(Endpoint::Products, http.clone(), samples::products()),
            lookbook: RemoteList::new(Endpoint::Lookbook, http.clone(), samples::lookbook()),
            testimonials: RemoteList::new(Endpoint::Testimonials, http, samples::testimonials()),
            backend,
        }
    }

    /// (Re)load every section from its endpoint.
    pub fn load_all(&self) {
        self.products.load(self.backend.url(Endpoint::Products).as_deref());
        self.lookbook.load(self.backend.url(Endpoint::Lookbook).as_deref());
        self.testimonials
            .load(self.backend.url(Endpoint::Testimonials).as_deref());
    }

    /// Shop data; rendered as loaded, even when empty.
    #[must_use]
    pub fn products(&self) -> ListState<Product> {
        self.products.snapshot()
    }

    /// The product a visitor picked, by title.
    ///
    /// Looks in the loaded list first, then in the fallback dataset the page
    /// shows while loading or after a failed load.
    #[must_use]
    pub fn find_product(&self, title: &str) -> Option<Product> {
        self.products
            .snapshot()
            .data
            .into_iter()
            .find(|product| product.title == title)
            .or_else(|| {
                self.products
                    .fallback()
                    .iter()
                    .find(|product| product.title == title)
                    .cloned()
            })
    }

    /// Lookbook entries, or the fallback when the loaded list is empty.
    #[must_use]
    pub fn lookbook(&self) -> Vec<LookbookEntry> {
        non_empty_or_fallback(&self.lookbook)
    }

    /// Testimonials, or the fallback when the loaded list is empty.
    #[must_use]
    pub fn testimonials(&self) -> Vec<Testimonial> {
        non_empty_or_fallback(&self.testimonials)
    }

    /// Whether no section has a fetch outstanding.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !(self.products.is_loading()
            || self.lookbook.is_loading()
            || self.testimonials.is_loading())
    }

    /// Wait for all three sections to finish their current load.
    pub async fn settled(&self) {
        tokio::join!(
            self.products.settled(),
            self.lookbook.settled(),
            self.testimonials.settled()
        );
    }
}

fn non_empty_or_fallback<T>(list: &RemoteList<T>) -> Vec<T>
where
    T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
{
    let state = list.snapshot();
    if state.data.is_empty() {
        list.fallback().to_vec()
    } else {
        state.data
    }
}

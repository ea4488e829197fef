//! Catalog records served by the backend list endpoints.
//!
//! Every field tolerates absence and `null` when decoding: the page renders
//! whatever the backend sends, and a product without a price simply costs
//! zero.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Price;

/// Decode `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A product shown in the shop grid.
///
/// The title identifies the product when a visitor adds it to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: Price,
    /// Open-ended label; the shop filter only knows a fixed subset.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Image URLs, first is primary.
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Product {
    /// The primary image, if the product has any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product is flagged as featured.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// An editorial image in the lookbook gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookbookEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// Short season label, e.g. "AW" or "SS".
    #[serde(deserialize_with = "null_as_default")]
    pub season: String,
}

/// A customer quote in the reviews section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quote: String,
    /// Displayed only; not validated against any range.
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i64,
}

impl Testimonial {
    /// Rating rendered as filled stars; non-positive ratings render nothing.
    #[must_use]
    pub fn stars(&self) -> String {
        let count = usize::try_from(self.rating.clamp(0, 10)).unwrap_or(0);
        "★".repeat(count)
    }
}

// =============================================================================
// Shop Filter
// =============================================================================

/// Category selection for the shop grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    TShirt,
    Outerwear,
    Pants,
    Accessories,
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::TShirt,
        Self::Outerwear,
        Self::Pants,
        Self::Accessories,
    ];

    /// The label shown on the filter button and matched against
    /// [`Product::category`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::TShirt => "T-shirt",
            Self::Outerwear => "Outerwear",
            Self::Pants => "Pants",
            Self::Accessories => "Accessories",
        }
    }

    /// Parse a selection from a query string value.
    ///
    /// Unknown or missing labels select [`CategoryFilter::All`].
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Whether a product belongs in the filtered view.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            other => product.category == other.label(),
        }
    }

    /// Apply the filter, keeping the loaded order.
    pub fn apply(self, products: &[Product]) -> impl Iterator<Item = &Product> {
        products.iter().filter(move |product| self.matches(product))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a label outside the fixed filter set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(title: &str, category: &str) -> Product {
        Product {
            title: title.to_string(),
            category: category.to_string(),
            ..Product::default()
        }
    }

    fn loaded() -> Vec<Product> {
        vec![
            product("Tee", "T-shirt"),
            product("Cargo", "Pants"),
            product("Hoodie", "Outerwear"),
            product("Cap", "Accessories"),
        ]
    }

    #[test]
    fn test_pants_filter_selects_exactly_one() {
        let products = loaded();
        let visible: Vec<_> = CategoryFilter::Pants.apply(&products).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.first().map(|p| p.title.as_str()), Some("Cargo"));
    }

    #[test]
    fn test_all_filter_restores_full_list() {
        let products = loaded();
        assert_eq!(CategoryFilter::Pants.apply(&products).count(), 1);
        assert_eq!(CategoryFilter::All.apply(&products).count(), 4);
    }

    #[test]
    fn test_unlisted_category_only_visible_under_all() {
        let products = vec![product("Socks", "Socks")];
        assert_eq!(CategoryFilter::All.apply(&products).count(), 1);
        for filter in CategoryFilter::ALL.into_iter().skip(1) {
            assert_eq!(filter.apply(&products).count(), 0);
        }
    }

    #[test]
    fn test_from_query() {
        assert_eq!(CategoryFilter::from_query(Some("T-shirt")), CategoryFilter::TShirt);
        assert_eq!(CategoryFilter::from_query(Some("pants")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
    }

    #[test]
    fn test_product_decodes_with_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"title":"Bare"}"#).unwrap();
        assert_eq!(product.title, "Bare");
        assert_eq!(product.price, Price::ZERO);
        assert_eq!(product.primary_image(), None);
        assert!(!product.is_featured());
    }

    #[test]
    fn test_null_fields_decode_as_missing() {
        let json = r#"{"title":"Gift Card","price":null,"images":null,"featured":null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "Gift Card");
        assert_eq!(product.price, Price::ZERO);
        assert_eq!(product.primary_image(), None);

        let review: Testimonial = serde_json::from_str(r#"{"name":null,"rating":null}"#).unwrap();
        assert_eq!(review.rating, 0);
        assert!(review.name.is_empty());
    }

    #[test]
    fn test_product_decodes_full_record() {
        let json = r#"{
            "title": "Minimal Cap",
            "description": "Structured 6-panel",
            "price": 39,
            "category": "Accessories",
            "images": ["https://img/1.jpg", "https://img/2.jpg"],
            "colors": ["Black"],
            "sizes": ["OS"],
            "featured": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Price::from_units(39));
        assert_eq!(product.primary_image(), Some("https://img/1.jpg"));
        assert!(product.is_featured());
    }

    #[test]
    fn test_testimonial_stars() {
        let t = Testimonial {
            rating: 5,
            ..Testimonial::default()
        };
        assert_eq!(t.stars(), "★★★★★");

        let negative = Testimonial {
            rating: -2,
            ..Testimonial::default()
        };
        assert_eq!(negative.stars(), "");
    }
}

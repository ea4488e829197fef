//! Shopping cart with its slide-in drawer.
//!
//! The cart is an ordered list of product snapshots. A line's identity is
//! its index; adding the same product twice yields two independent lines
//! (repetition models quantity). Count and total are derived on every read.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::Price;

/// A product placed into the cart, copied by value at the time of adding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLine(Product);

impl CartLine {
    /// The product snapshot held by this line.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.0
    }

    /// Price of this line.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.0.price
    }
}

impl From<Product> for CartLine {
    fn from(product: Product) -> Self {
        Self(product)
    }
}

/// Cart contents plus drawer visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    drawer_open: bool,
}

impl Cart {
    /// Create an empty cart with the drawer closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            drawer_open: false,
        }
    }

    /// Append a product and open the drawer so the update is visible.
    pub fn add(&mut self, product: Product) {
        self.lines.push(CartLine::from(product));
        self.drawer_open = true;
    }

    /// Remove the line at `index`, shifting later lines down.
    ///
    /// Returns the removed line, or `None` (leaving the cart untouched)
    /// when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::price).sum()
    }

    /// Total formatted with two decimal places (e.g. `"134.00"`).
    #[must_use]
    pub fn total_display(&self) -> String {
        self.total().fixed()
    }

    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Show the drawer without touching the lines.
    pub const fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Hide the drawer without touching the lines.
    pub const fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(title: &str, units: i64) -> Product {
        Product {
            title: title.to_string(),
            price: Price::from_units(units),
            ..Product::default()
        }
    }

    fn titles(cart: &Cart) -> Vec<&str> {
        cart.lines()
            .iter()
            .map(|line| line.product().title.as_str())
            .collect()
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(!cart.is_drawer_open());
        assert_eq!(cart.total_display(), "0.00");
    }

    #[test]
    fn test_add_sums_prices_and_opens_drawer() {
        let mut cart = Cart::new();
        cart.add(priced("Tee", 45));
        cart.add(priced("Hoodie", 89));

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total_display(), "134.00");
        assert!(cart.is_drawer_open());
    }

    #[test]
    fn test_duplicates_are_independent_lines() {
        let mut cart = Cart::new();
        let tee = priced("Tee", 45);
        cart.add(tee.clone());
        cart.add(tee.clone());
        cart.add(tee);

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Price::from_units(135));
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        let mut cart = Cart::new();
        cart.add(Product::default());
        cart.add(priced("Cap", 39));
        assert_eq!(cart.total_display(), "39.00");
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cart = Cart::new();
        for (title, units) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            cart.add(priced(title, units));
        }

        let removed = cart.remove(1);
        assert_eq!(removed.map(|l| l.product().title.clone()), Some("b".to_string()));
        assert_eq!(titles(&cart), ["a", "c", "d"]);
        assert_eq!(cart.total_display(), "8.00");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(priced("a", 1));
        cart.add(priced("b", 2));
        let before = cart.clone();

        assert!(cart.remove(2).is_none());
        assert!(cart.remove(usize::MAX).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_drawer_toggle_keeps_contents() {
        let mut cart = Cart::new();
        cart.add(priced("a", 10));
        cart.close_drawer();
        assert!(!cart.is_drawer_open());
        assert_eq!(cart.count(), 1);

        cart.open_drawer();
        assert!(cart.is_drawer_open());
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_lines_are_snapshots() {
        let mut cart = Cart::new();
        let mut tee = priced("Tee", 45);
        cart.add(tee.clone());
        tee.price = Price::from_units(1);

        assert_eq!(cart.total(), Price::from_units(45));
    }
}

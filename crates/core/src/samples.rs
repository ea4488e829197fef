//! Fallback datasets.
//!
//! Rendered whenever live data is unavailable or malformed, so the page
//! never shows an empty section.

use crate::catalog::{LookbookEntry, Product, Testimonial};
use crate::types::Price;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Sample products for the shop grid.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            title: "Monochrome Crest Tee".to_string(),
            description: "Premium heavyweight cotton, timeless silhouette.".to_string(),
            price: Price::from_units(45),
            category: "T-shirt".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1520975916090-3105956dac38?q=80&w=1400&auto=format&fit=crop",
            ]),
            colors: strings(&["Black", "White"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            featured: Some(true),
        },
        Product {
            title: "Urban Halo Hoodie".to_string(),
            description: "Fleece-lined comfort with refined minimal branding.".to_string(),
            price: Price::from_units(89),
            category: "Outerwear".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1548883354-7622d2d08c47?q=80&w=1400&auto=format&fit=crop",
            ]),
            colors: strings(&["Charcoal"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            featured: None,
        },
        Product {
            title: "Shadowline Cargo".to_string(),
            description: "Tailored cargo fit with matte hardware details.".to_string(),
            price: Price::from_units(98),
            category: "Pants".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1543087903-1ac2ec7aa8c5?q=80&w=1400&auto=format&fit=crop",
            ]),
            colors: strings(&["Obsidian"]),
            sizes: strings(&["28", "30", "32", "34", "36"]),
            featured: None,
        },
        Product {
            title: "Minimal Cap".to_string(),
            description: "Structured 6-panel with tonal embroidery.".to_string(),
            price: Price::from_units(39),
            category: "Accessories".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1520975661595-6453be3f7070?q=80&w=1400&auto=format&fit=crop",
            ]),
            colors: strings(&["Black"]),
            sizes: strings(&["OS"]),
            featured: None,
        },
    ]
}

/// Sample editorial images for the lookbook.
#[must_use]
pub fn lookbook() -> Vec<LookbookEntry> {
    let entry = |title: &str, image: &str, season: &str| LookbookEntry {
        title: title.to_string(),
        image: image.to_string(),
        season: season.to_string(),
    };

    vec![
        entry(
            "Noir Study I",
            "https://images.unsplash.com/photo-1761821170104-ccd3e3e21318?ixid=M3w3OTkxMTl8MHwxfHJhbmRvbXx8fHx8fHx8fDE3NjI3OTMyMDJ8&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80",
            "AW",
        ),
        entry(
            "Concrete Poem",
            "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1600&auto=format&fit=crop",
            "SS",
        ),
        entry(
            "Edge Line",
            "https://images.unsplash.com/photo-1694933052046-890d75d31cd9?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxFZGdlJTIwTGluZXxlbnwwfDB8fHwxNzYyNzkzMjAyfDA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80",
            "AW",
        ),
    ]
}

/// Sample customer quotes for the reviews section.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    let quote = |name: &str, quote: &str| Testimonial {
        name: name.to_string(),
        quote: quote.to_string(),
        rating: 5,
    };

    vec![
        quote(
            "Dimas",
            "Rebirth of Street Elegance — potongan dan materialnya berkelas.",
        ),
        quote(
            "Alya",
            "Where Street Meets Soul. Nyaman dipakai, styling jadi effortless.",
        ),
        quote("Raka", "Redefining Modern Streetwear. Clean, bold, confident."),
    ]
}

//! Ressurreccion Core - Domain types shared by the storefront.
//!
//! # Architecture
//!
//! The core crate contains only types and state machines - no I/O, no HTTP
//! clients, no sessions. Everything here can be exercised from plain unit
//! tests; the `storefront` crate wires it to the network and the browser.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices and email addresses
//! - [`catalog`] - Products, lookbook entries, testimonials, shop filter
//! - [`cart`] - The in-memory shopping cart and its drawer flag
//! - [`contact`] - Contact form payload and submission state machine
//! - [`shell`] - Page sections, in-page navigation, mobile menu flag
//! - [`samples`] - Fallback datasets rendered when the backend is unavailable

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod samples;
pub mod shell;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{CategoryFilter, LookbookEntry, Product, Testimonial};
pub use contact::{ContactPayload, ContactStatus};
pub use shell::{NavLink, Section, UiFlags};
pub use types::*;

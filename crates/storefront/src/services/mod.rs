//! Business logic services for storefront.
//!
//! # Services
//!
//! - `contact` - Contact form submission to the backend

pub mod contact;

pub use contact::ContactSubmitter;

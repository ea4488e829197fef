//! Ressurreccion Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Architecture
//!
//! - [`loader`] - Fetch-with-fallback list loader with stale-result guards
//! - [`catalog`] - The three backend-fed sections (products, lookbook, reviews)
//! - [`shell`] - Mounting the page shell and its refresh subscription
//! - [`services`] - Contact form submission
//! - [`routes`] - Axum handlers and the application router

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod shell;
pub mod state;
